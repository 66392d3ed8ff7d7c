use crate::models::TagColor;

/// 有序的 CSS 类名列表，只在渲染时拼接成字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: &'static str) -> Self {
        self.0.push(class);
        self
    }

    pub fn with_all(mut self, classes: &[&'static str]) -> Self {
        self.0.extend_from_slice(classes);
        self
    }

    pub fn with_if(self, condition: bool, class: &'static str) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl<const N: usize> From<[&'static str; N]> for ClassList {
    fn from(classes: [&'static str; N]) -> Self {
        Self(classes.to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
    Display,
}

impl FontSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            FontSize::Small => "fs-12",
            FontSize::Medium => "fs-14",
            FontSize::Large => "fs-18",
            FontSize::Display => "fs-32",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Red,
    White,
}

impl TextColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            TextColor::Red => "text-danger",
            TextColor::White => "text-white",
        }
    }
}

/// Font Awesome 图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Laptop,
    Linkedin,
    Medium,
    Stackoverflow,
    User,
    Xing,
}

impl Icon {
    pub fn css_classes(&self) -> &'static [&'static str] {
        match self {
            Icon::Github => &["fab", "fa-github"],
            Icon::Laptop => &["fas", "fa-laptop-code"],
            Icon::Linkedin => &["fab", "fa-linkedin"],
            Icon::Medium => &["fab", "fa-medium"],
            Icon::Stackoverflow => &["fab", "fa-stack-overflow"],
            Icon::User => &["fas", "fa-user"],
            Icon::Xing => &["fab", "fa-xing"],
        }
    }
}

/// 标签颜色对应的 Bootstrap badge 类
pub fn tag_color_class(color: TagColor) -> &'static str {
    match color {
        TagColor::Blue => "badge-primary",
        TagColor::Gray => "badge-secondary",
        TagColor::Green => "badge-success",
        TagColor::Red => "badge-danger",
        TagColor::Yellow => "badge-warning",
        TagColor::Cyan => "badge-info",
        TagColor::White => "badge-light",
        TagColor::Black => "badge-dark",
    }
}
