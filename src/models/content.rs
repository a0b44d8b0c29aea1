use serde::Serialize;

/// A headline product capability shown on a tilting card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub sub_features: &'static [SubFeature],
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubFeature {
    pub heading: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecurityFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Outbound hyperlink, always opened in a new tab
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}
