//! End-to-end tests for paragraph reconstruction over raw page text.

use pdf_paragraphs::layout::{build_paragraphs, LineFrequencyTable};
use pdf_paragraphs::pipeline::{extract_paragraphs, ParagraphPipeline};
use pdf_paragraphs::text::normalize_page;
use pdf_paragraphs::{ElementType, ExtractionConfig, TextElement};

fn pages(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

fn texts(elements: &[TextElement]) -> Vec<&str> {
    elements.iter().map(|e| e.text.as_str()).collect()
}

mod running_headers {
    use super::*;

    #[test]
    fn test_confidential_notice_removed_from_every_page() {
        let doc = pages(&[
            "Confidential Draft\nThe project started in spring.\n\nInitial scope was small.",
            "Confidential Draft\nBudget approval came in June.",
            "Confidential Draft\nDelivery is planned for next year.\n\nRisks remain.",
        ]);
        let elements = extract_paragraphs(&doc);

        assert!(elements.iter().all(|e| e.text != "Confidential Draft"));
        assert!(elements.iter().all(|e| !e.text.contains("Confidential Draft")));

        let got: Vec<(&str, usize)> = elements.iter().map(|e| (e.text.as_str(), e.page)).collect();
        assert_eq!(
            got,
            vec![
                ("The project started in spring.", 1),
                ("Initial scope was small.", 1),
                ("Budget approval came in June.", 2),
                ("Delivery is planned for next year.", 3),
                ("Risks remain.", 3),
            ]
        );
    }

    #[test]
    fn test_header_on_two_of_three_pages_is_removed() {
        let doc = pages(&["Chapter One\nalpha", "Chapter One\nbeta", "gamma"]);
        assert_eq!(texts(&extract_paragraphs(&doc)), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_header_whitespace_variants_match() {
        let doc = pages(&["  Quarterly   Report\nalpha", "Quarterly Report  \nbeta"]);
        assert_eq!(texts(&extract_paragraphs(&doc)), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_repeated_long_line_is_body_text() {
        let long = "This sentence is deliberately long enough to exceed the eighty character cutoff, surely.";
        assert!(long.chars().count() > 80);
        let doc = vec![long.to_string(), long.to_string()];
        let elements = extract_paragraphs(&doc);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text, long);
    }

    #[test]
    fn test_single_page_repeats_survive() {
        let doc = pages(&["Step\n\nStep\n\nStep"]);
        assert_eq!(texts(&extract_paragraphs(&doc)), vec!["Step", "Step", "Step"]);
    }

    #[test]
    fn test_repeated_body_line_within_one_page_not_treated_as_header() {
        // "Yes." twice on page 1 only counts once, so it is not a running header
        let doc = pages(&["Yes.\n\nYes.", "Something else"]);
        assert_eq!(texts(&extract_paragraphs(&doc)), vec!["Yes.", "Yes.", "Something else"]);
    }
}

mod page_numbers {
    use super::*;

    #[test]
    fn test_lone_digit_dropped() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["Body\n\n7"]))), vec!["Body"]);
    }

    #[test]
    fn test_two_digit_dropped() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["42\nBody"]))), vec!["Body"]);
    }

    #[test]
    fn test_four_digit_year_kept() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["2024"]))), vec!["2024"]);
    }

    #[test]
    fn test_arabic_indic_number_dropped() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["Body\n\n\u{0667}"]))), vec!["Body"]);
    }

    #[test]
    fn test_padded_number_dropped() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["Body\n   9   "]))), vec!["Body"]);
    }
}

mod grouping {
    use super::*;

    #[test]
    fn test_blank_line_boundary_scenario() {
        let page = "Para one line A\nPara one line B\n\nPara two";
        assert_eq!(
            texts(&extract_paragraphs(&pages(&[page]))),
            vec!["Para one line A Para one line B", "Para two"]
        );
    }

    #[test]
    fn test_hyphen_rejoin_scenario() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["exam-\nple text"]))), vec!["example text"]);
    }

    #[test]
    fn test_hyphen_at_paragraph_end_stripped() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["exam-\n\nnext"]))), vec!["exam", "next"]);
    }

    #[test]
    fn test_lone_hyphen_paragraph_discarded() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["-\n\nbody"]))), vec!["body"]);
    }

    #[test]
    fn test_plain_join_scenario() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["Hello\nworld"]))), vec!["Hello world"]);
    }

    #[test]
    fn test_spaced_dash_does_not_rejoin() {
        assert_eq!(texts(&extract_paragraphs(&pages(&["end -\nnext"]))), vec!["end - next"]);
    }

    #[test]
    fn test_soft_hyphen_inside_word_removed() {
        let doc = pages(&["docu\u{00AD}ment"]);
        assert_eq!(texts(&extract_paragraphs(&doc)), vec!["document"]);
    }

    #[test]
    fn test_element_type_is_paragraph() {
        let elements = extract_paragraphs(&pages(&["a\n\nb"]));
        assert!(elements.iter().all(|e| e.element_type == ElementType::Paragraph));
    }
}

mod pages_and_order {
    use super::*;

    #[test]
    fn test_empty_pages_produce_no_placeholder() {
        let doc = pages(&["", "first", "", "", "second", ""]);
        let elements = extract_paragraphs(&doc);
        let got: Vec<(&str, usize)> =
            elements.iter().map(|e| (e.text.as_str(), e.page)).collect();
        assert_eq!(got, vec![("first", 2), ("second", 5)]);
    }

    #[test]
    fn test_page_order_is_non_decreasing() {
        let doc = pages(&["a\n\nb\n\nc", "d", "e\n\nf"]);
        let elements = extract_paragraphs(&doc);
        assert!(elements.windows(2).all(|w| w[0].page <= w[1].page));
        assert_eq!(texts(&elements), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_sequential_pipeline_matches_default() {
        let doc = pages(&["Head\nx-\ny\n\n1", "Head\nz", "", "w\r\nv"]);
        let sequential = ParagraphPipeline::with_config(ExtractionConfig::new().with_parallel(false));
        assert_eq!(sequential.process(&doc), extract_paragraphs(&doc));
    }

    #[test]
    fn test_stages_compose_by_hand() {
        let raw = pages(&["Footer\nOne", "Footer\nTwo"]);
        let normalized: Vec<String> = raw.iter().map(|p| normalize_page(p)).collect();
        let table = LineFrequencyTable::build(&normalized);
        assert_eq!(table.count("Footer"), 2);
        assert_eq!(build_paragraphs(&normalized[0], &table, 2), vec!["One"]);
        assert_eq!(build_paragraphs(&normalized[1], &table, 2), vec!["Two"]);
    }
}
