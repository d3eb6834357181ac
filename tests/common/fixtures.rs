/// A small document exercising path, style, transform and xlink attributes.
pub fn sample_document() -> &'static str {
    r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <g transform="translate(10 20)" style="fill:none; stroke:black">
    <path d="M 0 0 10 10 20 20"/>
    <use xlink:href="#marker" x="5" y="5"/>
  </g>
</svg>"##
}

/// A document whose style attribute is not valid declaration syntax.
pub fn document_with_bad_style() -> &'static str {
    r#"<svg xmlns="http://www.w3.org/2000/svg">
  <rect style="width-but-no-colon"/>
</svg>"#
}
