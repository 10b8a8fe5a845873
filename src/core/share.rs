//! Share text and image file names for a result.

/// Title used when handing the result to a native share sheet.
pub const SHARE_TITLE: &str = "My Vibe Animal Result";

/// Default landing page linked from share text.
pub const DEFAULT_SHARE_URL: &str = "https://vibe-animal.vercel.app/";

const FILE_PREFIX: &str = "vibe-animal";

/// "I got {name}! {glyph} Discover your vibe animal at {url}". No glyph, no gap.
pub fn share_text(name: &str, glyph: &str, url: &str) -> String {
    if glyph.is_empty() {
        format!("I got {}! Discover your vibe animal at {}", name, url)
    } else {
        format!("I got {}! {} Discover your vibe animal at {}", name, glyph, url)
    }
}

/// Shorter text used with social share links, which carry the URL separately.
pub fn short_share_text(name: &str, glyph: &str) -> String {
    if glyph.is_empty() {
        format!("I got {}! Discover your vibe animal:", name)
    } else {
        format!("I got {}! {} Discover your vibe animal:", name, glyph)
    }
}

/// Social network with a web share-intent endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SocialPlatform {
    Twitter,
    Facebook,
    Whatsapp,
}

/// Share-intent link for `platform`; text and URL are percent-encoded.
pub fn social_share_url(platform: SocialPlatform, name: &str, glyph: &str, url: &str) -> String {
    let text = urlencoding::encode(&short_share_text(name, glyph)).into_owned();
    let url = urlencoding::encode(url);
    match platform {
        SocialPlatform::Twitter => {
            format!("https://twitter.com/intent/tweet?text={}&url={}", text, url)
        }
        SocialPlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            url, text
        ),
        SocialPlatform::Whatsapp => {
            format!("https://api.whatsapp.com/send?text={}%20{}", text, url)
        }
    }
}

/// PNG file name for the flattened image, e.g. `vibe-animal-snow-leopard.png`.
pub fn image_file_name(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        format!("{}.png", FILE_PREFIX)
    } else {
        format!("{}-{}.png", FILE_PREFIX, slug)
    }
}
