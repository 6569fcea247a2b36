/// Nominal icon size, stated in the generated header comment.
pub const ICON_WIDTH: u32 = 24;
pub const ICON_HEIGHT: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    pub file_name: &'static str,
    pub identifier: &'static str,
}

impl IconDescriptor {
    pub const fn new(file_name: &'static str, identifier: &'static str) -> Self {
        IconDescriptor {
            file_name,
            identifier,
        }
    }
}

/// Emission order of the generated header follows this table.
pub static ICONS: &[IconDescriptor] = &[
    IconDescriptor::new("play.png", "icon_play"),
    IconDescriptor::new("pause.png", "icon_pause"),
    IconDescriptor::new("skip_next.png", "icon_next"),
    IconDescriptor::new("skip_previous.png", "icon_prev"),
    IconDescriptor::new("shuffle_on.png", "icon_shuffle"),
    IconDescriptor::new("favorite_on.png", "icon_heart"),
];
