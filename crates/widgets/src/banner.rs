/// Identity banner drawn at the top of every frame.
pub const BANNER: &str = r"  ___ __ _____ _ _ _ __  ___ _ _ (_) |_ ___ _ _
 / _ \ V / -_) '_| '  \/ _ \ ' \| |  _/ _ \ '_|
 \___/\_/\___|_| |_|_|_\___/_||_|_|\__\___/_|";

/// Banner lines, top to bottom.
pub fn banner_lines() -> impl Iterator<Item = &'static str> {
    BANNER.lines()
}
