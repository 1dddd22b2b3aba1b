//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use revstatic::parsers::html::parse_srcset;

    #[test]
    fn single_entry_without_descriptor() {
        let candidates = parse_srcset("pic.jpg");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "pic.jpg");
        assert_eq!(candidates[0].descriptor, "");
    }

    #[test]
    fn width_descriptors() {
        let candidates = parse_srcset("small.jpg 480w, large.jpg 800w");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].url, "small.jpg");
        assert_eq!(candidates[0].descriptor, "480w");
        assert_eq!(candidates[1].url, "large.jpg");
        assert_eq!(candidates[1].descriptor, "800w");
    }

    #[test]
    fn density_descriptors() {
        let candidates = parse_srcset("normal.png 1x, retina.png 2x");

        assert_eq!(candidates[0].descriptor, "1x");
        assert_eq!(candidates[1].descriptor, "2x");
    }

    #[test]
    fn surrounding_whitespace_and_newlines() {
        let candidates = parse_srcset("a.png  1x,\n\tb.png 2x");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].url, "a.png");
        assert_eq!(candidates[0].descriptor, "1x");
        assert_eq!(candidates[1].url, "b.png");
    }

    #[test]
    fn stray_commas_are_skipped() {
        let candidates = parse_srcset("a.png 1x,, b.png 2x,");

        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn descriptor_is_opaque_and_preserved_verbatim() {
        let candidates = parse_srcset("pic.jpg 480w 2x");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "pic.jpg");
        assert_eq!(candidates[0].descriptor, "480w 2x");
    }

    #[test]
    fn empty_srcset_yields_nothing() {
        assert!(parse_srcset("").is_empty());
        assert!(parse_srcset(" , ,, ").is_empty());
    }
}
