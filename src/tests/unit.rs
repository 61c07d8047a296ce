#[cfg(test)]
mod unit_tests {

    use crate::{BlockMap, Context, LangKey, Source, parse, select, select_with};

    #[test]
    fn single_pair_round_trip() {
        let map = parse("{mlang DE}Hallo Welt{mlang}");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("de"), Some("Hallo Welt"));
    }

    #[test]
    fn values_borrow_from_source() {
        let raw = String::from("{mlang en} zero copy {mlang}");
        let map = parse(&raw);
        let text = map.get("en").unwrap();
        let offset = text.as_ptr() as usize - raw.as_ptr() as usize;
        assert_eq!(&raw[offset..offset + text.len()], "zero copy");
    }

    #[test]
    fn pt_br_fallback() {
        let raw = "{mlang pt_br}A{mlang}{mlang es}B{mlang}";
        assert_eq!(select(&parse(raw), "fr", Some("pt_br"), raw), Some("A"));
    }

    #[test]
    fn english_fallback() {
        let raw = "{mlang en}A{mlang}{mlang pt_br}B{mlang}";
        assert_eq!(select(&parse(raw), "fr", Some("de"), raw), Some("A"));
    }

    #[test]
    fn other_fallback() {
        let raw = "{mlang pt_br}A{mlang}{mlang}B{mlang}";
        assert_eq!(select(&parse(raw), "fr", None, raw), Some("B"));
    }

    #[test]
    fn arbitrary_pick() {
        let raw = "{mlang sw}Swahili content.{mlang}";
        assert_eq!(select(&parse(raw), "fr", None, raw), Some("Swahili content."));
    }

    #[test]
    fn uppercase_request() {
        let raw = "{mlang en}A{mlang}{mlang es}B{mlang}";
        let sel = select_with(&parse(raw), &Context::new("EN"), raw).unwrap();
        assert_eq!((sel.text, sel.source), ("A", Source::Current));
    }

    #[test]
    fn other_key_can_be_requested_directly() {
        let raw = "{mlang en}A{mlang}{mlang}B{mlang}";
        assert_eq!(select(&parse(raw), "OTHER", None, raw), Some("B"));
    }

    #[test]
    fn hand_built_map() {
        let mut map = BlockMap::new();
        map.insert(LangKey::normalize("pt_br"), "A");
        map.insert(LangKey::normalize("es"), "B");
        assert_eq!(select(&map, "fr", Some("pt_br"), "ignored"), Some("A"));
        assert_eq!(select(&map, "fr", None, "ignored"), Some("A"));
    }
}
