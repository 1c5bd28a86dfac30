use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [30, 50, 100];

/// Page sizes offered by a page-size selector.
///
/// Zero is not a selectable size and duplicates are dropped; the original
/// order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct PageSizeOptions(Vec<usize>);

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl From<Vec<usize>> for PageSizeOptions {
    fn from(options: Vec<usize>) -> Self {
        Self::new(options)
    }
}

impl From<PageSizeOptions> for Vec<usize> {
    fn from(options: PageSizeOptions) -> Self {
        options.0
    }
}

impl PageSizeOptions {
    pub fn new(options: impl IntoIterator<Item = usize>) -> Self {
        let mut kept: Vec<usize> = Vec::new();
        for size in options {
            if size > 0 && !kept.contains(&size) {
                kept.push(size);
            }
        }
        Self(kept)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, size: usize) -> bool {
        self.0.contains(&size)
    }

    /// Selectable sizes, with `current` appended when it is not one of the options.
    pub fn choices(&self, current: usize) -> Vec<usize> {
        let mut choices = self.0.clone();
        if !choices.contains(&current) {
            choices.push(current);
        }
        choices
    }

    /// The choice after `current`, wrapping around.
    pub fn next_after(&self, current: usize) -> usize {
        self.step(current, 1)
    }

    /// The choice before `current`, wrapping around.
    pub fn previous_before(&self, current: usize) -> usize {
        self.step(current, -1)
    }

    fn step(&self, current: usize, offset: isize) -> usize {
        let choices = self.choices(current);
        let len = choices.len() as isize;
        let index = choices
            .iter()
            .position(|&size| size == current)
            .unwrap_or(0) as isize;
        choices[(index + offset).rem_euclid(len) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PageSizeOptions::default().as_slice(), &[30, 50, 100]);
    }

    #[test]
    fn test_new_drops_zero_and_duplicates() {
        let options = PageSizeOptions::new([10, 0, 20, 10]);
        assert_eq!(options.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_choices_include_unlisted_current() {
        let options = PageSizeOptions::default();
        assert_eq!(options.choices(50), vec![30, 50, 100]);
        assert_eq!(options.choices(2), vec![30, 50, 100, 2]);
    }

    #[test]
    fn test_cycling_wraps() {
        let options = PageSizeOptions::default();
        assert_eq!(options.next_after(30), 50);
        assert_eq!(options.next_after(100), 30);
        assert_eq!(options.previous_before(30), 100);
        assert_eq!(options.previous_before(50), 30);
    }

    #[test]
    fn test_cycling_from_unlisted_size() {
        let options = PageSizeOptions::default();
        assert_eq!(options.next_after(2), 30);
        assert_eq!(options.previous_before(2), 100);
    }

    #[test]
    fn test_cycling_with_no_options_stays_put() {
        let options = PageSizeOptions::new(Vec::new());
        assert_eq!(options.next_after(25), 25);
        assert_eq!(options.previous_before(25), 25);
    }
}
