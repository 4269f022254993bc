use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaLink, FaLocationDot};
use dioxus_free_icons::Icon;
use store::Profile;

/// Public page header: avatar, name, title, location, email and social links.
#[component]
pub fn ProfileHeader(profile: Profile) -> Element {
    rsx! {
        header { class: "profile-header",
            if !profile.image.is_empty() {
                img {
                    class: "profile-avatar",
                    src: "{profile.image}",
                    alt: "{profile.name}",
                }
            }
            h1 { class: "profile-name", "{profile.name}" }
            p { class: "profile-title", "{profile.title}" }
            div { class: "profile-meta",
                if !profile.location.is_empty() {
                    span { class: "profile-location",
                        Icon { icon: FaLocationDot, width: 14, height: 14 }
                        "{profile.location}"
                    }
                }
                if !profile.email.is_empty() {
                    a {
                        class: "profile-email",
                        href: "mailto:{profile.email}",
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        "{profile.email}"
                    }
                }
            }
            div { class: "profile-socials",
                for social in profile.socials.iter().cloned() {
                    a {
                        key: "{social.id}",
                        class: "social-link",
                        href: "{social.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "{social.platform}",
                        SocialIcon { platform: social.platform.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialIcon(platform: String) -> Element {
    match platform.to_lowercase().as_str() {
        "github" => rsx! { Icon { icon: fa_brands_icons::FaGithub, width: 18, height: 18 } },
        "twitter" | "x" => rsx! { Icon { icon: fa_brands_icons::FaTwitter, width: 18, height: 18 } },
        "linkedin" => rsx! { Icon { icon: fa_brands_icons::FaLinkedin, width: 18, height: 18 } },
        "instagram" => rsx! { Icon { icon: fa_brands_icons::FaInstagram, width: 18, height: 18 } },
        "medium" => rsx! { Icon { icon: fa_brands_icons::FaMedium, width: 18, height: 18 } },
        "youtube" => rsx! { Icon { icon: fa_brands_icons::FaYoutube, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: FaLink, width: 18, height: 18 } },
    }
}
