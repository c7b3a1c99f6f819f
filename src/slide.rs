use serde::{Deserialize, Serialize};

/// One carousel frame: an image plus optional caption and call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            title: None,
            text: None,
            button: None,
            link: None,
        }
    }

    pub fn with_caption(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.text = Some(text.into());
        self
    }

    pub fn with_action(mut self, button: impl Into<String>, link: impl Into<String>) -> Self {
        self.button = Some(button.into());
        self.link = Some(link.into());
        self
    }

    pub fn has_caption(&self) -> bool {
        self.title.is_some() || self.text.is_some() || self.button.is_some()
    }
}

// The hero slides of the landing page
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("images/travel2.jpg", "Travel Insurance")
            .with_caption(
                "Travel with Confidence",
                "Explore the world safely with our comprehensive travel insurance.",
            )
            .with_action("View Details", "#products"),
        Slide::new("images/fire.webp", "Fire Insurance")
            .with_caption(
                "Fire Protection Plans",
                "Protect your home and business from unexpected fire damage.",
            )
            .with_action("View Details", "#products"),
        Slide::new("images/car.jpg", "Car Insurance")
            .with_caption(
                "Drive Without Worries",
                "Enjoy every ride with full car insurance coverage.",
            )
            .with_action("View Details", "#quote"),
        Slide::new("images/marine.webp", "Marine Insurance")
            .with_caption(
                "Marine Cargo Protection",
                "Ensure your cargo and vessel are always secure.",
            )
            .with_action("View Details", "#products"),
    ]
}
