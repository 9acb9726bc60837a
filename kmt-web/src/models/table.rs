//! Client-side table mechanics shared by the user and article lists.
//!
//! Filtering, sorting and pagination all happen in memory over the rows
//! a page has already fetched; the filter is re-applied synchronously on
//! every keystroke.

/// Rows rendered per table page.
pub const PAGE_SIZE: usize = 10;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction, used when a header is clicked twice.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Keep the rows whose haystack contains the filter text,
/// case-insensitively. Surrounding whitespace in the filter is ignored
/// and an empty filter keeps every row.
pub fn filter_rows<T, F>(rows: &[T], filter: &str, haystack: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| haystack(row).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sort rows by a string key, case-insensitively.
pub fn sort_rows<T, F>(rows: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> String,
{
    rows.sort_by(|a, b| {
        let ordering = key(a).to_lowercase().cmp(&key(b).to_lowercase());
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `total` rows. An empty table still has a
/// single (empty) page.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Clamp a page index so filtering that shrinks the row set never
/// leaves the view on a page past the end.
#[must_use]
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// The rows visible on the given page.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    rows.iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Asha Patel",
                email: "asha.patel@example.com",
            },
            Row {
                name: "Li Wei",
                email: "li.wei@example.com",
            },
            Row {
                name: "Maya Novak",
                email: "maya.novak@corp.example.org",
            },
        ]
    }

    fn haystack(row: &Row) -> String {
        format!("{} {}", row.name, row.email)
    }

    #[test]
    fn filter_matches_email_substring_case_insensitively() {
        let filtered = filter_rows(&rows(), "ASHA.PATEL", haystack);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Asha Patel");
    }

    #[test]
    fn empty_filter_keeps_all_rows() {
        assert_eq!(filter_rows(&rows(), "", haystack).len(), 3);
        assert_eq!(filter_rows(&rows(), "   ", haystack).len(), 3);
    }

    #[test]
    fn filter_trims_surrounding_whitespace() {
        let filtered = filter_rows(&rows(), "  corp.example  ", haystack);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Maya Novak");
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        assert!(filter_rows(&rows(), "zz-nobody", haystack).is_empty());
    }

    #[test]
    fn sort_is_case_insensitive_and_reversible() {
        let mut data = rows();
        sort_rows(&mut data, SortDirection::Ascending, |row| {
            row.name.to_string()
        });
        assert_eq!(data[0].name, "Asha Patel");
        assert_eq!(data[2].name, "Maya Novak");

        sort_rows(&mut data, SortDirection::Descending, |row| {
            row.name.to_string()
        });
        assert_eq!(data[0].name, "Maya Novak");
        assert_eq!(data[2].name, "Asha Patel");
    }

    #[test]
    fn toggle_flips_direction() {
        assert_eq!(
            SortDirection::Ascending.toggle(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggle(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn page_count_covers_edges() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn clamp_page_pulls_back_after_filtering() {
        // Was on page 2 of the unfiltered set; the filter leaves 3 rows.
        assert_eq!(clamp_page(2, 3, 10), 0);
        assert_eq!(clamp_page(1, 15, 10), 1);
        assert_eq!(clamp_page(0, 0, 10), 0);
    }

    #[test]
    fn page_slice_returns_the_visible_window() {
        let data: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&data, 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&data, 2, 10), (20..25).collect::<Vec<_>>());
        assert!(page_slice(&data, 3, 10).is_empty());
    }
}
