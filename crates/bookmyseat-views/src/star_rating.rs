use std::fmt;

pub const STAR_COUNT: u8 = 5;

const FILLED: char = '★';
const EMPTY: char = '☆';

type OnChange = Box<dyn FnMut(u8) + Send>;

/// Five-star input. The parent supplies the value and an on-change callback;
/// hovering previews a value without committing it.
pub struct StarRating {
    value: u8,
    hover: u8,
    read_only: bool,
    on_change: Option<OnChange>,
}

impl StarRating {
    pub fn editable(value: u8) -> Self {
        Self {
            value,
            hover: 0,
            read_only: false,
            on_change: None,
        }
    }

    pub fn read_only(value: u8) -> Self {
        Self {
            read_only: true,
            ..Self::editable(value)
        }
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(u8) + Send + 'static) -> Self {
        self.set_on_change(on_change);
        self
    }

    pub fn set_on_change(&mut self, on_change: impl FnMut(u8) + Send + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Programmatic write; does not notify.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.read_only = disabled;
        if disabled {
            self.hover = 0;
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Commits `star` and notifies. Returns whether the value was accepted.
    pub fn click(&mut self, star: u8) -> bool {
        if self.read_only || !(1..=STAR_COUNT).contains(&star) {
            return false;
        }
        self.value = star;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(star);
        }
        true
    }

    pub fn hover(&mut self, star: u8) {
        if !self.read_only && star <= STAR_COUNT {
            self.hover = star;
        }
    }

    pub fn leave(&mut self) {
        self.hover = 0;
    }

    /// The hovered value while previewing, otherwise the committed one
    pub fn display_rating(&self) -> u8 {
        if self.hover > 0 {
            self.hover
        } else {
            self.value
        }
    }

    pub fn render(&self) -> String {
        let filled = self.display_rating().min(STAR_COUNT);
        (1..=STAR_COUNT)
            .map(|star| if star <= filled { FILLED } else { EMPTY })
            .collect()
    }
}

impl fmt::Debug for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarRating")
            .field("value", &self.value)
            .field("hover", &self.hover)
            .field("read_only", &self.read_only)
            .finish()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_click_commits_and_notifies() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        let mut stars = StarRating::editable(0).with_on_change(move |v| seen.lock().unwrap().push(v));

        assert!(stars.click(4));
        assert_eq!(stars.value(), 4);
        assert_eq!(stars.render(), "★★★★☆");
        assert_eq!(*changes.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_hover_previews_without_committing() {
        let mut stars = StarRating::editable(2);
        stars.hover(5);
        assert_eq!(stars.display_rating(), 5);
        assert_eq!(stars.value(), 2);

        stars.leave();
        assert_eq!(stars.display_rating(), 2);
        assert_eq!(stars.render(), "★★☆☆☆");
    }

    #[test]
    fn test_read_only_ignores_interaction() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        let mut stars = StarRating::read_only(3).with_on_change(move |v| seen.lock().unwrap().push(v));

        assert!(!stars.click(5));
        stars.hover(5);
        assert_eq!(stars.display_rating(), 3);
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disable_and_programmatic_write() {
        let mut stars = StarRating::editable(1);
        stars.set_disabled(true);
        assert!(!stars.click(2));

        stars.set_value(0);
        assert_eq!(stars.render(), "☆☆☆☆☆");

        stars.set_disabled(false);
        assert!(stars.click(5));
        assert!(!stars.click(6));
        assert!(!stars.click(0));
        assert_eq!(stars.value(), 5);
    }
}
