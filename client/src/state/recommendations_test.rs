use super::*;

const SAMPLE: &str = "Recomendaciones para P1 ** Riego: Regar dos veces por semana. ** Luz: Sombra parcial, 4 h: mañana. ** ** Revisar hojas cada mes.";

#[test]
fn splits_on_double_asterisks_and_drops_blanks() {
    let sections = parse_recommendations(SAMPLE);
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0], RecommendationSection { title: None, body: "Recomendaciones para P1".to_owned() });
}

#[test]
fn titles_after_the_first_are_numbered_by_position() {
    let sections = parse_recommendations(SAMPLE);
    assert_eq!(sections[1].title.as_deref(), Some("1. Riego"));
    assert_eq!(sections[1].body, "Regar dos veces por semana.");
    assert_eq!(sections[2].title.as_deref(), Some("2. Luz"));
    assert_eq!(sections[3].title, None);
}

#[test]
fn body_keeps_text_after_first_colon() {
    let sections = parse_recommendations(SAMPLE);
    assert_eq!(sections[2].body, "Sombra parcial, 4 h: mañana.");
}

#[test]
fn first_titled_section_is_not_numbered() {
    let sections = parse_recommendations("**Resumen:** planta sana");
    assert_eq!(sections[0].title.as_deref(), Some("Resumen"));
    assert_eq!(sections[0].body, "Resumen:");
    assert_eq!(sections[1].body, "planta sana");
}

#[test]
fn blank_title_renders_without_heading() {
    let sections = parse_recommendations("Intro**: regar al amanecer");
    assert_eq!(sections[1].title, None);
    assert_eq!(sections[1].body, "regar al amanecer");
}

#[test]
fn empty_body_falls_back_to_whole_piece() {
    let sections = parse_recommendations("Intro**Riego:**cada dos días");
    assert_eq!(sections[1].title.as_deref(), Some("1. Riego"));
    assert_eq!(sections[1].body, "Riego:");
    assert_eq!(sections[2].title, None);
    assert_eq!(sections[2].body, "cada dos días");
}

#[test]
fn empty_text_has_no_sections() {
    assert!(parse_recommendations("  ** ** ").is_empty());
    let mut reveal = RevealState::new("");
    assert!(reveal.is_complete());
    assert!(!reveal.tick());
}

#[test]
fn reveal_ticks_one_section_at_a_time() {
    let mut reveal = RevealState::new(SAMPLE);
    assert!(reveal.shown().is_empty());

    assert!(reveal.tick());
    assert_eq!(reveal.shown().len(), 1);
    assert!(reveal.tick());
    assert!(reveal.tick());
    assert!(!reveal.tick());
    assert!(reveal.is_complete());
    assert_eq!(reveal.shown().len(), 4);

    assert!(!reveal.tick());
    assert_eq!(reveal.visible, 4);
}
