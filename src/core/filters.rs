use crate::models::{Category, Location};

/// Category restriction applied to a query
///
/// `Unrecognized` comes from callers passing a label outside the known
/// categories; it matches nothing instead of raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized,
}

impl CategoryFilter {
    /// Build a filter from an optional raw label
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => CategoryFilter::All,
            Some(label) => label
                .parse::<Category>()
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::Unrecognized),
        }
    }

    #[inline]
    pub fn matches(&self, location: &Location) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => location.category == *category,
            CategoryFilter::Unrecognized => false,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

/// Case-folded free-text needle
///
/// A blank query (empty or whitespace only) matches every location.
#[derive(Debug, Clone)]
pub struct TextQuery {
    needle: Option<String>,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        Self { needle }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    /// Check name, address, description and category label
    #[inline]
    pub fn matches(&self, location: &Location) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        [
            location.name.as_str(),
            location.address.as_str(),
            location.description.as_str(),
            location.category.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_location(name: &str, category: Category) -> Location {
        Location {
            id: name.to_lowercase(),
            name: name.to_string(),
            category,
            address: "500 Valencia St, San Francisco".to_string(),
            description: "Bright room with big windows".to_string(),
            average_rating: 4.0,
            total_ratings: 3,
            image_url: None,
            distance: None,
            coordinates: None,
            geofence_radius: None,
        }
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let location = create_test_location("Ritual Coffee", Category::Cafe);

        assert!(TextQuery::new("").matches(&location));
        assert!(TextQuery::new("   \t").matches(&location));
        assert!(TextQuery::new(" ").is_blank());
    }

    #[test]
    fn test_query_matches_each_field() {
        let location = create_test_location("Ritual Coffee", Category::Cafe);

        assert!(TextQuery::new("ritual").matches(&location));
        assert!(TextQuery::new("VALENCIA").matches(&location));
        assert!(TextQuery::new("big windows").matches(&location));
        assert!(TextQuery::new("caf").matches(&location));
        assert!(!TextQuery::new("gym").matches(&location));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let location = create_test_location("Ritual Coffee", Category::Cafe);

        // Surrounding spaces are part of the needle
        assert!(TextQuery::new("ritual coffee").matches(&location));
        assert!(!TextQuery::new(" ritual coffee ").matches(&location));
    }

    #[test]
    fn test_category_filter() {
        let cafe = create_test_location("Ritual Coffee", Category::Cafe);

        assert!(CategoryFilter::All.matches(&cafe));
        assert!(CategoryFilter::Only(Category::Cafe).matches(&cafe));
        assert!(!CategoryFilter::Only(Category::Gym).matches(&cafe));
        assert!(!CategoryFilter::Unrecognized.matches(&cafe));
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("park")), CategoryFilter::Only(Category::Park));
        assert_eq!(CategoryFilter::parse(Some("nightclub")), CategoryFilter::Unrecognized);
    }
}
