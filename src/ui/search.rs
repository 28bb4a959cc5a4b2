/// Search overlay form state
use std::fmt;

use crate::state::data::LookupTable;
use crate::state::filter::FilterCriteria;

/// One entry of the genre/author selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// `None` is the "All ..." entry
    pub id: Option<String>,
    pub label: String,
}

impl SelectOption {
    pub fn all(label: &str) -> Self {
        Self {
            id: None,
            label: label.to_string(),
        }
    }

    /// "All ..." first, then every table entry in table order
    pub fn from_table(table: &LookupTable, all_label: &str) -> Vec<SelectOption> {
        std::iter::once(Self::all(all_label))
            .chain(table.iter().map(|(id, name)| SelectOption {
                id: Some(id.to_string()),
                label: name.to_string(),
            }))
            .collect()
    }

    fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub const ALL_GENRES: &str = "All Genres";
pub const ALL_AUTHORS: &str = "All Authors";

/// Current values of the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub title: String,
    pub genre: SelectOption,
    pub author: SelectOption,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: SelectOption::all(ALL_GENRES),
            author: SelectOption::all(ALL_AUTHORS),
        }
    }
}

impl SearchForm {
    /// Clear every field (done each time the overlay opens)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_form(&self.title, self.genre.id_str(), self.author.id_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_options_start_with_all() {
        let table: LookupTable = [("g2", "Horror"), ("g1", "Fiction")].into_iter().collect();
        let options = SelectOption::from_table(&table, ALL_GENRES);

        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["All Genres", "Horror", "Fiction"]);
        assert_eq!(options[0].id, None);
        assert_eq!(options[1].id.as_deref(), Some("g2"));
    }

    #[test]
    fn test_default_form_is_unfiltered() {
        assert!(SearchForm::default().criteria().is_unfiltered());
    }

    #[test]
    fn test_form_to_criteria() {
        let form = SearchForm {
            title: "the".to_string(),
            genre: SelectOption { id: Some("g2".to_string()), label: "Horror".to_string() },
            author: SelectOption::all(ALL_AUTHORS),
        };

        let criteria = form.criteria();
        assert_eq!(criteria.title_fragment, "the");
        assert_eq!(criteria.genre_id.as_deref(), Some("g2"));
        assert_eq!(criteria.author_id, None);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = SearchForm {
            title: "x".to_string(),
            genre: SelectOption { id: Some("g".to_string()), label: "G".to_string() },
            author: SelectOption { id: Some("a".to_string()), label: "A".to_string() },
        };
        form.reset();
        assert_eq!(form, SearchForm::default());
    }
}
