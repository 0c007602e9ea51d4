use studydeck_core::{decode_entities, minimize_html, strip_html, strip_html_media};

#[test]
fn strip_removes_tags_and_decodes_entities() {
    assert_eq!(strip_html("<b>hi</b> &amp; bye"), "hi & bye");
}

#[test]
fn strip_drops_script_and_style_blocks_across_lines() {
    let html = "<p>keep</p><script type=\"text/javascript\">\nvar x = '<b>';\n</script>\
                <style>\n.b { font-weight: bold }\n</style>this";
    assert_eq!(strip_html(html), "keepthis");
}

#[test]
fn entities_decode_after_tags_are_gone() {
    assert_eq!(strip_html("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
}

#[test]
fn numeric_references_decode_in_both_bases() {
    assert_eq!(decode_entities("&#72;&#x69;&#x1F600;"), "Hi\u{1F600}");
}

#[test]
fn unknown_or_invalid_references_pass_through() {
    assert_eq!(
        decode_entities("&bogus; &#xZZ; &#99999999999; &amp"),
        "&bogus; &#xZZ; &#99999999999; &amp"
    );
}

#[test]
fn named_references_use_the_html4_table() {
    assert_eq!(
        decode_entities("caf&eacute;&nbsp;&copy;&mdash;"),
        "caf\u{e9}\u{a0}\u{a9}\u{2014}"
    );
}

#[test]
fn stripping_plain_text_is_stable() {
    let text = "plain text, no markup";
    assert_eq!(strip_html(text), text);
    assert_eq!(strip_html(&strip_html(text)), strip_html(text));
}

#[test]
fn media_strip_keeps_image_filenames() {
    assert_eq!(strip_html_media(r#"<img src="cat.jpg">"#), " cat.jpg ");
    assert_eq!(
        strip_html_media(r#"<div>see<img src='a b.png' /></div>"#),
        "see a b.png "
    );
}

#[test]
fn media_strip_ignores_other_attributes_order() {
    // Only `src` directly after `img` is recognized.
    assert_eq!(strip_html_media(r#"<img alt="x" src="cat.jpg">"#), "");
}

#[test]
fn minimize_rewrites_editor_spans() {
    let html = concat!(
        r#"<span style="font-weight:600;">bold</span> and "#,
        r#"<span style="font-style:italic;">it</span> "#,
        r#"<span style="text-decoration: underline;">u</span>"#,
    );
    assert_eq!(minimize_html(html), "<b>bold</b> and <i>it</i> <u>u</u>");
}
