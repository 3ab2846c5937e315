//! Presentation renderers for the fetched pair
//!
//! Two consumers of the pipeline output: an ANSI truecolor frame for the
//! terminal binary and an HTML page for the web binary. Both are pure
//! functions over the decoded raster and quote text.

use crate::error::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::DynamicImage;
use image::imageops::FilterType;
use std::fmt::Write as _;
use std::io::Cursor;

/// Render the raster as an ANSI truecolor frame of `width` x `height` cells.
///
/// Each pixel becomes two spaces on a `ESC[48;2;r;g;b` background, one image
/// row per output line, each line reset at its end.
pub fn ascii_frame(raster: &DynamicImage, width: u32, height: u32) -> String {
    let scaled = raster
        .resize_exact(width.max(1), height.max(1), FilterType::Triangle)
        .to_rgb8();

    let mut out = String::with_capacity((scaled.width() as usize * 22 + 1) * scaled.height() as usize);
    for y in 0..scaled.height() {
        for x in 0..scaled.width() {
            let pixel = scaled.get_pixel(x, y);
            let _ = write!(
                out,
                "\x1b[48;2;{};{};{}m  \x1b[0m",
                pixel[0], pixel[1], pixel[2]
            );
        }
        out.push('\n');
    }
    out
}

/// Render the quote and raster as a standalone HTML page.
///
/// The raster is re-encoded as JPEG and embedded base64 in a `data:` URI;
/// the quote is typed out client-side by a small script.
pub fn html_page(quote: &str, raster: &DynamicImage) -> Result<String> {
    let encoded = encode_jpeg_base64(raster)?;
    Ok(PAGE_TEMPLATE
        .replace("{{IMAGE}}", &encoded)
        .replace("{{TEXT}}", &escape_for_template_literal(quote)))
}

fn encode_jpeg_base64(raster: &DynamicImage) -> Result<String> {
    // JPEG has no alpha channel; normalize to RGB before encoding.
    let rgb = DynamicImage::ImageRgb8(raster.to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, image::ImageFormat::Jpeg)?;
    Ok(BASE64.encode(buf.into_inner()))
}

/// Escape quote text for embedding inside the page's JS template literal
fn escape_for_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
body {
    font-family: Arial, sans-serif;
    background-color: #f4f4f4;
    margin: 0;
    padding: 0;
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: 100vh;
}
.container {
    text-align: center;
    padding: 20px;
    background-color: #ffffff;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    border-radius: 8px;
    max-width: 600px;
}
h1 {
    color: #333333;
    margin-bottom: 10px;
}
p {
    color: #666666;
    margin-bottom: 20px;
    word-wrap: break-word;
    font-size: 18px;
    line-height: 1.5;
}
img {
    max-width: 100%;
    max-height: 600px;
    border-radius: 4px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}
</style>
</head>
<body>
    <div class="container">
        <h1>Random Text and Image</h1>
        <p id="typed-text"></p>
        <img src="data:image/jpeg;base64,{{IMAGE}}" alt="Random Image">
    </div>
    <script>
        const textElement = document.getElementById("typed-text");
        const textToType = `{{TEXT}}`;

        function typeText(text, element) {
            element.textContent = "";
            let currentIndex = 0;

            function typeNextLetter() {
                if (currentIndex < text.length) {
                    element.textContent += text[currentIndex];
                    currentIndex++;
                    setTimeout(typeNextLetter, 30);
                }
            }

            typeNextLetter();
        }

        typeText(textToType, textElement);
    </script>
</body>
</html>
"#;

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn solid_raster(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(width, height, image::Rgb(rgb)))
    }

    #[test]
    fn ascii_frame_has_one_line_per_row_and_one_cell_per_column() {
        let frame = ascii_frame(&solid_raster(8, 8, [255, 0, 0]), 3, 2);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.matches("\x1b[48;2;").count(), 3);
            assert!(line.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn ascii_frame_uses_the_pixel_color() {
        let frame = ascii_frame(&solid_raster(4, 4, [10, 20, 30]), 1, 1);
        assert!(frame.contains("\x1b[48;2;10;20;30m"));
    }

    #[test]
    fn ascii_frame_tolerates_zero_dimensions() {
        let frame = ascii_frame(&solid_raster(4, 4, [0, 0, 0]), 0, 0);
        assert_eq!(frame.lines().count(), 1);
    }

    #[test]
    fn html_page_embeds_base64_jpeg_and_quote() {
        let page = html_page("Stay hungry.", &solid_raster(4, 4, [1, 2, 3])).unwrap();

        assert!(page.contains("data:image/jpeg;base64,"));
        assert!(page.contains("Stay hungry."));
        // The placeholder markers must be gone.
        assert!(!page.contains("{{IMAGE}}"));
        assert!(!page.contains("{{TEXT}}"));
    }

    #[test]
    fn html_page_escapes_template_literal_delimiters() {
        let page = html_page("tick ` and ${x} and </script>", &solid_raster(2, 2, [0, 0, 0]))
            .unwrap();

        assert!(page.contains("tick \\` and \\${x} and <\\/script>"));
    }
}
