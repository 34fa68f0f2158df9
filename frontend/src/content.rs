//! Every piece of copy shown on the landing page.
//!
//! The catalog is built once in `main`, wrapped in an `Rc` and handed to the
//! component tree through context. Nothing holds a mutable reference to it.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub brand: BrandCopy,
    pub hero: HeroCopy,
    pub story: StoryCopy,
    pub ebook: EbookCopy,
    pub testimonials: TestimonialsCopy,
    pub lead_magnet: LeadMagnetCopy,
    pub footer: FooterCopy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandCopy {
    pub name: String,
    pub role: String,
    pub blurb: String,
}

impl BrandCopy {
    /// Letter shown inside the round avatar badges.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub trust_line: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoryCopy {
    pub heading: String,
    pub text: String,
    pub author_role: String,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EbookCopy {
    pub badge: String,
    pub title: String,
    pub tagline: String,
    pub cover_title: String,
    pub cover_subtitle: String,
    pub cover_note: String,
    pub contents_heading: String,
    pub contents: Vec<String>,
    pub bonus_heading: String,
    pub bonuses: Vec<String>,
    pub regular_price: String,
    pub price: String,
    pub price_note: String,
    pub cta_text: String,
    pub guarantee: String,
    /// Product name sent with the checkout order.
    pub product: String,
    /// Whole-dollar amount sent with the checkout order.
    pub order_price: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsCopy {
    pub heading: String,
    pub subheading: String,
    pub verified_label: String,
    pub items: Vec<Testimonial>,
    pub proof_headline: String,
    pub proof_note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub text: String,
    pub author: String,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        initial_of(&self.author)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeadMagnetCopy {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub placeholder: String,
    pub benefits: Vec<Benefit>,
    pub assurances: Vec<String>,
    pub community_note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterCopy {
    pub quick_links_heading: String,
    pub quick_links: Vec<FooterLink>,
    pub social_heading: String,
    pub social_links: Vec<SocialLink>,
    pub signature: String,
    pub made_with: String,
    pub legal_links: Vec<FooterLink>,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub handle: String,
}

impl SocialLink {
    pub fn href(&self) -> String {
        format!("#{}", self.platform.to_string().to_lowercase())
    }

    pub fn label(&self) -> String {
        format!("{}: {}", self.platform, self.handle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
}

impl Platform {
    pub fn icon(self) -> &'static str {
        match self {
            Platform::TikTok => "🎵",
            Platform::Instagram => "📸",
            Platform::YouTube => "📺",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
        };
        f.write_str(name)
    }
}

fn initial_of(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn link(label: &str, href: &str) -> FooterLink {
    FooterLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

impl ContentCatalog {
    pub fn sammy_sparkle() -> Self {
        Self {
            brand: BrandCopy {
                name: "Sammy Sparkle".to_string(),
                role: "TikTok Growth Coach".to_string(),
                blurb: "Helping creators grow their TikTok with authenticity, heart, and a whole lot of sparkle.".to_string(),
            },
            hero: HeroCopy {
                headline: "How I Gained 150,000 Followers on TikTok — and Found Myself in the Process.".to_string(),
                subheadline: "A step-by-step playbook to grow your TikTok with heart, purpose, and sparkle.".to_string(),
                cta_text: "Download the 150K Playbook →".to_string(),
                trust_line: "Join 180,000+ followers who trust Sammy's authentic approach ✨".to_string(),
            },
            story: StoryCopy {
                heading: "My Story".to_string(),
                text: "Two years ago, I was posting daily to 200 views. I felt invisible. Then I stopped chasing the algorithm and started showing up as myself — and that changed everything. I grew to 150,000 followers by turning authenticity into strategy. Now, I'm sharing everything I learned.".to_string(),
                author_role: "TikTok Creator & Growth Coach".to_string(),
                stats: vec![
                    Stat { value: "180K+".to_string(), label: "TikTok Followers".to_string() },
                    Stat { value: "50M+".to_string(), label: "Total Views".to_string() },
                    Stat { value: "2 Years".to_string(), label: "From 200 to 180K".to_string() },
                ],
            },
            ebook: EbookCopy {
                badge: "✨ LIMITED TIME LAUNCH PRICE ✨".to_string(),
                title: "The TikTok 150K Playbook".to_string(),
                tagline: "The proven path to grow, glow, and connect online.".to_string(),
                cover_title: "The TikTok 150K Playbook".to_string(),
                cover_subtitle: "Your Complete Growth Guide".to_string(),
                cover_note: "Based on real results from 180K+ followers".to_string(),
                contents_heading: "What's Inside:".to_string(),
                contents: strings(&[
                    "My exact posting rhythm and daily routine",
                    "Viral hook formulas that work in 2025",
                    "How to balance emotion + strategy",
                    "The mindset shift behind consistent virality",
                ]),
                bonus_heading: "🎁 BONUS INCLUDED:".to_string(),
                bonuses: strings(&["30 viral hook templates", "Content planning worksheet"]),
                regular_price: "Regular Price: $79".to_string(),
                price: "$29 AUD".to_string(),
                price_note: "Launch Price - Limited Time!".to_string(),
                cta_text: "Get Your Copy ($29 AUD) →".to_string(),
                guarantee: "Instant download • 30-day money-back guarantee".to_string(),
                product: "TikTok 150K Playbook".to_string(),
                order_price: 29,
            },
            testimonials: TestimonialsCopy {
                heading: "Real Results from Real People ✨".to_string(),
                subheading: "See how the 150K Playbook is transforming creators' lives and follower counts".to_string(),
                verified_label: "Verified Customer".to_string(),
                items: vec![
                    Testimonial {
                        id: 1,
                        text: "I followed Sammy's strategy and hit 10K followers in a month.".to_string(),
                        author: "Jessica M.".to_string(),
                    },
                    Testimonial {
                        id: 2,
                        text: "Her eBook gave me the confidence to show up as me again.".to_string(),
                        author: "Sarah K.".to_string(),
                    },
                    Testimonial {
                        id: 3,
                        text: "The viral hook formulas actually work! My views doubled in a week.".to_string(),
                        author: "Emma R.".to_string(),
                    },
                ],
                proof_headline: "500+ Success Stories".to_string(),
                proof_note: "And counting! Join the Sparkle community today.".to_string(),
            },
            lead_magnet: LeadMagnetCopy {
                badge: "FREE DOWNLOAD".to_string(),
                title: "Grab my Free Viral Hook Checklist!".to_string(),
                subtitle: "The 10 hooks that took my videos from 500 views → 500,000.".to_string(),
                cta_text: "Get the Free Checklist →".to_string(),
                placeholder: "Enter your email address".to_string(),
                benefits: vec![
                    Benefit { icon: "✨".to_string(), title: "Proven Hooks".to_string(), text: "10 viral hook templates that work".to_string() },
                    Benefit { icon: "📈".to_string(), title: "Instant Results".to_string(), text: "See improvement in your next post".to_string() },
                    Benefit { icon: "💎".to_string(), title: "Exclusive Access".to_string(), text: "Plus weekly tips in your inbox".to_string() },
                ],
                assurances: strings(&["No spam, ever", "Unsubscribe anytime", "Instant delivery"]),
                community_note: "Join 12,000+ creators already growing with Sammy's strategies ✨".to_string(),
            },
            footer: FooterCopy {
                quick_links_heading: "Quick Links".to_string(),
                quick_links: vec![
                    link("About", "#about"),
                    link("150K Playbook", "#ebook"),
                    link("Success Stories", "#testimonials"),
                    link("Free Resources", "#freebie"),
                ],
                social_heading: "Follow the Journey ✨".to_string(),
                social_links: vec![
                    SocialLink { platform: Platform::TikTok, handle: "@sammysparkle".to_string() },
                    SocialLink { platform: Platform::Instagram, handle: "@sammysparkle".to_string() },
                    SocialLink { platform: Platform::YouTube, handle: "Sammy Sparkle".to_string() },
                ],
                signature: "Keep shining, and never dim your sparkle — Sammy ✨".to_string(),
                made_with: "Made with love by Sammy Sparkle".to_string(),
                legal_links: vec![
                    link("Privacy Policy", "#privacy"),
                    link("Terms of Service", "#terms"),
                    link("Contact", "#contact"),
                ],
                copyright: "© 2025 Sammy Sparkle. All rights reserved.".to_string(),
            },
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::sammy_sparkle()
    }
}

/// Catalog provided by the nearest `ContextProvider<Rc<ContentCatalog>>`.
#[hook]
pub fn use_content() -> Rc<ContentCatalog> {
    use_context::<Rc<ContentCatalog>>().unwrap_or_else(|| {
        log::warn!("No content catalog in context, using the built-in copy");
        Rc::new(ContentCatalog::default())
    })
}
