//! Hard-coded default document used for first-run seeding and as the
//! last-resort fallback when neither the remote store nor the local cache
//! has data.

use crate::models::{
    BookData, CreativityData, Document, GalleryItem, LinkItem, LinksData, Profile, ReadingData,
    ReadingItem, Section, SectionData, SocialLink, WritingData,
};

/// Password written into a freshly seeded profile row.
pub const DEFAULT_PASSWORD: &str = "admin123";

fn social(id: &str, platform: &str, url: &str) -> SocialLink {
    SocialLink {
        id: id.to_string(),
        platform: platform.to_string(),
        url: url.to_string(),
    }
}

/// The seed document: profile plus five sections in order
/// `[book, writing, creativity, reading, links]`.
pub fn default_document() -> Document {
    Document {
        profile: Profile {
            id: None,
            name: "Antone Holmes".to_string(),
            title: "Teacher & Coach".to_string(),
            location: "United States".to_string(),
            image: "https://horizons-cdn.hostinger.com/bed3f87d-420c-47ae-8b4d-deb0bd03d36c/d204b32c70f86dfc0314f64d5c3c19be.jpg".to_string(),
            email: "antone@example.com".to_string(),
            socials: vec![
                social("medium", "Medium", "#"),
                social("linkedin", "LinkedIn", "#"),
                social("behance", "Behance", "#"),
            ],
        },
        sections: vec![
            Section {
                id: "book".to_string(),
                title: "Featured Publication".to_string(),
                subtitle: Some("First Edition".to_string()),
                visible: true,
                data: SectionData::Book(BookData {
                    title: "The New Man's Devotional".to_string(),
                    description: "\"If any man be in Christ, he is a new creature. Old things are passed away, behold, all things are become new.\" - 2 Corinthians 5:17".to_string(),
                    image: "https://horizons-cdn.hostinger.com/bed3f87d-420c-47ae-8b4d-deb0bd03d36c/887155913029f3787eb4016919bcfe33.png".to_string(),
                    url: "https://www.amazon.com/dp/B0FH9T3QRJ".to_string(),
                }),
            },
            Section {
                id: "writing".to_string(),
                title: "My Writing".to_string(),
                subtitle: None,
                visible: true,
                data: SectionData::Writing(WritingData {
                    feed_url: "https://medium.com/feed/@antoneh".to_string(),
                }),
            },
            Section {
                id: "creativity".to_string(),
                title: "Recent Creations".to_string(),
                subtitle: Some("Click thumbnails to view output details".to_string()),
                visible: true,
                data: SectionData::Creativity(CreativityData {
                    items: vec![
                        GalleryItem {
                            id: "1".to_string(),
                            title: "SaaS Dashboard UI".to_string(),
                            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2070&auto=format&fit=crop".to_string(),
                            alt: "Modern SaaS dashboard interface".to_string(),
                        },
                        GalleryItem {
                            id: "2".to_string(),
                            title: "E-commerce Platform".to_string(),
                            image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?q=80&w=2064&auto=format&fit=crop".to_string(),
                            alt: "Clean e-commerce website layout".to_string(),
                        },
                        GalleryItem {
                            id: "3".to_string(),
                            title: "Fintech Mobile App".to_string(),
                            image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?q=80&w=1470&auto=format&fit=crop".to_string(),
                            alt: "Financial technology mobile app".to_string(),
                        },
                    ],
                }),
            },
            Section {
                id: "reading".to_string(),
                title: "What I'm Reading".to_string(),
                subtitle: None,
                visible: true,
                data: SectionData::Reading(ReadingData {
                    items: vec![
                        ReadingItem {
                            id: "1".to_string(),
                            title: "Atomic Habits".to_string(),
                            author: "James Clear".to_string(),
                            url: "https://www.amazon.com/Atomic-Habits-Proven-Build-Break/dp/0735211299".to_string(),
                            image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?q=80&w=2000&auto=format&fit=crop".to_string(),
                        },
                        ReadingItem {
                            id: "2".to_string(),
                            title: "The Creative Act".to_string(),
                            author: "Rick Rubin".to_string(),
                            url: "https://www.amazon.com/Creative-Act-Way-Being/dp/0593652886".to_string(),
                            image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?q=80&w=2000&auto=format&fit=crop".to_string(),
                        },
                        ReadingItem {
                            id: "3".to_string(),
                            title: "Deep Work".to_string(),
                            author: "Cal Newport".to_string(),
                            url: "https://www.amazon.com/Deep-Work-Focused-Success-Distracted/dp/1455586692".to_string(),
                            image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?q=80&w=2000&auto=format&fit=crop".to_string(),
                        },
                    ],
                }),
            },
            Section {
                id: "links".to_string(),
                title: "Connect".to_string(),
                subtitle: None,
                visible: true,
                data: SectionData::Links(LinksData {
                    links: vec![
                        LinkItem {
                            id: "1".to_string(),
                            title: "LinkedIn".to_string(),
                            subtitle: "Professional profile & history".to_string(),
                            url: "#".to_string(),
                            icon: "LinkedIn".to_string(),
                        },
                        LinkItem {
                            id: "2".to_string(),
                            title: "Behance".to_string(),
                            subtitle: "Design portfolio & case studies".to_string(),
                            url: "#".to_string(),
                            icon: "Behance".to_string(),
                        },
                        LinkItem {
                            id: "3".to_string(),
                            title: "Medium".to_string(),
                            subtitle: "Articles, thoughts & essays".to_string(),
                            url: "#".to_string(),
                            icon: "Medium".to_string(),
                        },
                    ],
                }),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections_are_in_canonical_order() {
        let doc = default_document();
        let kinds: Vec<&str> = doc.sections.iter().map(|s| s.data.kind()).collect();
        assert_eq!(kinds, ["book", "writing", "creativity", "reading", "links"]);
        assert!(doc.sections.iter().all(|s| s.visible));
        assert!(doc.profile.id.is_none());
    }
}
