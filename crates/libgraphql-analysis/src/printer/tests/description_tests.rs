use crate::printer::description::break_line;
use crate::printer::description::print_description;

fn long_line() -> String {
    vec!["The quick brown fox jumps over the lazy dog."; 3].join(" ")
}

mod break_line {
    use super::*;

    #[test]
    fn short_lines_are_kept_whole() {
        assert_eq!(
            break_line("A short description", 120),
            vec!["A short description".to_string()],
        );
    }

    #[test]
    fn long_lines_break_at_spaces() {
        assert_eq!(long_line().chars().count(), 134);
        assert_eq!(
            break_line(&long_line(), 120),
            vec![
                "The quick brown fox jumps over the lazy dog. The quick brown fox jumps over the"
                    .to_string(),
                "lazy dog. The quick brown fox jumps over the lazy dog.".to_string(),
            ],
        );
    }

    #[test]
    fn indentation_narrows_the_break() {
        assert_eq!(
            break_line(&long_line(), 118),
            vec![
                "The quick brown fox jumps over the lazy dog. The quick brown fox jumps over"
                    .to_string(),
                "the lazy dog. The quick brown fox jumps over the lazy dog.".to_string(),
            ],
        );
    }

    #[test]
    fn lines_without_spaces_are_kept_whole() {
        let line = "x".repeat(130);
        assert_eq!(break_line(&line, 120), vec![line]);
    }
}

mod print_description {
    use super::*;

    #[test]
    fn missing_description_prints_nothing() {
        assert_eq!(print_description(None, "  ", false), "");
    }

    #[test]
    fn blank_lines_print_as_bare_markers() {
        assert_eq!(
            print_description(Some("First\n\nSecond"), "  ", true),
            "  # First\n  #\n  # Second\n",
        );
    }

    #[test]
    fn later_items_in_a_block_are_preceded_by_a_blank_line() {
        assert_eq!(
            print_description(Some("Second field"), "  ", false),
            "\n  # Second field\n",
        );
        assert_eq!(
            print_description(Some("Top-level type"), "", false),
            "# Top-level type\n",
        );
    }

    #[test]
    fn long_lines_wrap_to_the_indented_width() {
        assert_eq!(
            print_description(Some(&long_line()), "", true),
            "# The quick brown fox jumps over the lazy dog. The quick brown fox jumps over the\n\
             # lazy dog. The quick brown fox jumps over the lazy dog.\n",
        );
        assert_eq!(
            print_description(Some(&long_line()), "  ", true),
            "  # The quick brown fox jumps over the lazy dog. The quick brown fox jumps over\n  \
             # the lazy dog. The quick brown fox jumps over the lazy dog.\n",
        );
    }
}
