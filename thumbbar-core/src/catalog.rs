use std::fmt;

/// One of the buttons on the taskbar thumbnail toolbar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IconName {
    Previous,
    Play,
    Pause,
    Next,
}

impl IconName {
    pub const ALL: [IconName; 4] = [
        IconName::Previous,
        IconName::Play,
        IconName::Pause,
        IconName::Next,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Previous => "previous",
            IconName::Play => "play",
            IconName::Pause => "pause",
            IconName::Next => "next",
        }
    }

    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.as_str())
    }

    pub fn ico_file_name(&self) -> String {
        format!("{}.ico", self.as_str())
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Size::new(size, size)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Frame sizes of every icon bundle, in the order they are packed.
pub const ICON_SIZES: [Size; 4] = [
    Size::square(16),
    Size::square(20),
    Size::square(24),
    Size::square(32),
];
