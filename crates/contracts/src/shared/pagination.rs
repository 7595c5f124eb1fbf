use serde::ser::Serializer;
use serde::Serialize;

/// Marker rendered between non-adjacent page links.
pub const ELLIPSIS: &str = "...";

/// One entry in the visible-pages strip: either a concrete page number or
/// an ellipsis gap. Serializes as a bare number or the string `"..."`, so
/// a window comes out as e.g. `[1, "...", 4, 5, 6, "...", 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number_or_marker() {
        let window = vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(9),
            PageItem::Page(10),
        ];
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"[1,"...",9,10]"#);
    }
}
