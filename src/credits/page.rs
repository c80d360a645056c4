use crate::texture_loader::ImageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Right => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLine {
    pub text: String,
    pub column: Column,
}

/// One screen of the credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditPage {
    pub title: String,
    pub last_line: String,
    pub lines: Vec<CreditLine>,
    pub image: Option<ImageId>,
}

impl CreditPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            last_line: String::new(),
            lines: Vec::new(),
            image: None,
        }
    }

    pub fn with_last_line(mut self, last_line: impl Into<String>) -> Self {
        self.last_line = last_line.into();
        self
    }

    pub fn with_image(mut self, image: Option<ImageId>) -> Self {
        self.image = image;
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.push(text, Column::Left);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, column: Column) {
        self.lines.push(CreditLine { text: text.into(), column });
    }

    /// Lines of one column in insertion order.
    pub fn column(&self, column: Column) -> impl Iterator<Item = &CreditLine> {
        self.lines.iter().filter(move |l| l.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_keep_insertion_order() {
        let mut page = CreditPage::new("Donators");
        page.push("a", Column::Left);
        page.push("x", Column::Right);
        page.push("b", Column::Left);
        page.push("y", Column::Right);

        let left: Vec<&str> = page.column(Column::Left).map(|l| l.text.as_str()).collect();
        let right: Vec<&str> = page.column(Column::Right).map(|l| l.text.as_str()).collect();
        assert_eq!(left, ["a", "b"]);
        assert_eq!(right, ["x", "y"]);
        assert_eq!(Column::Right.index(), 1);
    }
}
