use std::fmt;
use std::path::PathBuf;
use url::Url;

/// SourceLocation value object: where a device tree or stylesheet comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(PathBuf),
    Remote(String),
}

impl SourceLocation {
    /// Interprets user input: absolute `http` and `https` URLs are remote,
    /// everything else is a file path
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                SourceLocation::Remote(input.to_string())
            }
            _ => SourceLocation::File(PathBuf::from(input)),
        }
    }

    /// Final name component: the file name, or the last URL path segment
    /// with query string and fragment removed
    pub fn file_name(&self) -> Option<String> {
        match self {
            SourceLocation::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            SourceLocation::Remote(url) => Url::parse(url)
                .ok()?
                .path_segments()?
                .next_back()
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::File(path) => write!(f, "{}", path.display()),
            SourceLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_remote(location: &SourceLocation) -> bool {
        matches!(location, SourceLocation::Remote(_))
    }

    #[test]
    fn test_parse_file_path() {
        let location = SourceLocation::parse("boards/rpi4.dtb");
        assert_eq!(location, SourceLocation::File(PathBuf::from("boards/rpi4.dtb")));
    }

    #[test]
    fn test_parse_remote_url() {
        assert!(is_remote(&SourceLocation::parse("https://example.com/dt/board.dtb")));
        assert!(is_remote(&SourceLocation::parse("HTTP://example.com/board.dts")));
    }

    #[test]
    fn test_path_containing_http_is_a_file() {
        assert!(!is_remote(&SourceLocation::parse("./http-fixtures/board.dtb")));
    }

    #[test]
    fn test_other_schemes_are_files() {
        assert!(!is_remote(&SourceLocation::parse("ftp://example.com/board.dtb")));
        assert!(!is_remote(&SourceLocation::parse(r"C:\boards\board.dtb")));
    }

    #[test]
    fn test_file_name_for_file() {
        let location = SourceLocation::parse("/boot/dtbs/bcm2711-rpi-4-b.dtb");
        assert_eq!(location.file_name().as_deref(), Some("bcm2711-rpi-4-b.dtb"));
    }

    #[test]
    fn test_file_name_for_url_strips_query_and_fragment() {
        let location = SourceLocation::parse("https://example.com/a/board.dts?raw=1#top");
        assert_eq!(location.file_name().as_deref(), Some("board.dts"));
    }

    #[test]
    fn test_file_name_for_url_with_backslashes() {
        // Backslashes in http(s) URLs are path separators
        let location = SourceLocation::parse(r"http://example.com\boards\board.dtb");
        assert_eq!(location.file_name().as_deref(), Some("board.dtb"));
    }

    #[test]
    fn test_file_name_for_url_with_encoded_query_separator() {
        let location = SourceLocation::parse("https://example.com/dl/board.dtb?name=a/b.dts");
        assert_eq!(location.file_name().as_deref(), Some("board.dtb"));
    }

    #[test]
    fn test_file_name_for_bare_host_url() {
        assert_eq!(SourceLocation::parse("https://example.com").file_name(), None);
        assert_eq!(SourceLocation::parse("https://example.com/").file_name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SourceLocation::parse("https://example.com/x.dtb").to_string(),
            "https://example.com/x.dtb"
        );
        assert_eq!(SourceLocation::parse("x.dtb").to_string(), "x.dtb");
    }
}
