use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("Regar *poco* en invierno.\n\n- Sombra\n- Abono");
    assert!(html.contains("<em>poco</em>"));
    assert!(html.contains("<li>Sombra</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("Hola <script>alert(1)</script> mundo\n\n<div onclick=\"x\">bloque</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div"));
    assert!(html.contains("Hola"));
}

#[test]
fn escapes_text_content() {
    let html = render_markdown_html("pH < 7 & > 5");
    assert!(html.contains("&lt; 7 &amp; &gt; 5"));
}

// =============================================================
// Link destinations
// =============================================================

#[test]
fn drops_javascript_links_but_keeps_their_text() {
    let html = render_markdown_html("Ver [ficha](javascript:alert(1)) y ![foto](JavaScript:alert(2))");
    assert!(!html.to_lowercase().contains("javascript:"));
    assert!(!html.contains("<a"));
    assert!(!html.contains("<img"));
    assert!(html.contains("ficha"));
}

#[test]
fn keeps_http_and_mailto_links() {
    let html = render_markdown_html("[guía](https://example.com/riego) o [correo](mailto:vivero@example.com)");
    assert!(html.contains("<a href=\"https://example.com/riego\">guía</a>"));
    assert!(html.contains("href=\"mailto:vivero@example.com\""));
}

#[test]
fn url_scheme_check() {
    assert!(is_safe_url("https://example.com"));
    assert!(is_safe_url("HTTP://example.com"));
    assert!(is_safe_url("/plantas/P1"));
    assert!(is_safe_url("#riego"));
    assert!(is_safe_url("ayuda?tema=a:b"));
    assert!(!is_safe_url("javascript:alert(1)"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url("data:text/html;base64,AAAA"));
    assert!(!is_safe_url("vbscript:msgbox"));
}
