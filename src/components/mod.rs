mod animated_title;
mod feature_card;
mod floating_paths;
mod footer;
mod hero;
mod security_feature;

pub use animated_title::AnimatedTitle;
pub use feature_card::FeatureCard;
pub use floating_paths::FloatingPaths;
pub use footer::SiteFooter;
pub use hero::{CallToAction, Hero, VideoEmbed};
pub use security_feature::SecurityFeatureCard;
