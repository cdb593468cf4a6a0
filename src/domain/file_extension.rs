use crate::ports::outbound::image_codec::Encoding;

/// Suffix of a stored image file. `None` only turns up when probing for files
/// that were written without a recognised suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Png,
    Jpg,
    None,
}

impl FileExtension {
    /// Priority order used when looking a name up on disk.
    pub const LOOKUP_ORDER: [FileExtension; 3] =
        [FileExtension::Png, FileExtension::Jpg, FileExtension::None];

    #[must_use]
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            FileExtension::Png => Some("png"),
            FileExtension::Jpg => Some("jpg"),
            FileExtension::None => None,
        }
    }

    #[must_use]
    pub fn file_name(self, name: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("{name}.{suffix}"),
            None => name.to_string(),
        }
    }
}

impl From<Encoding> for FileExtension {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Lossless => FileExtension::Png,
            Encoding::Lossy { .. } => FileExtension::Jpg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_with_suffix() {
        assert_eq!(FileExtension::Png.file_name("Profile_Pic"), "Profile_Pic.png");
        assert_eq!(FileExtension::Jpg.file_name("Profile_Pic"), "Profile_Pic.jpg");
    }

    #[test]
    fn test_file_name_without_suffix() {
        assert_eq!(FileExtension::None.file_name("Profile_Pic"), "Profile_Pic");
    }

    #[test]
    fn test_lookup_order_prefers_lossless() {
        assert_eq!(FileExtension::LOOKUP_ORDER[0], FileExtension::Png);
        assert_eq!(FileExtension::LOOKUP_ORDER[1], FileExtension::Jpg);
        assert_eq!(FileExtension::LOOKUP_ORDER[2], FileExtension::None);
    }

    #[test]
    fn test_from_encoding() {
        assert_eq!(FileExtension::from(Encoding::Lossless), FileExtension::Png);
        assert_eq!(
            FileExtension::from(Encoding::Lossy { quality: 1.0 }),
            FileExtension::Jpg
        );
    }
}
