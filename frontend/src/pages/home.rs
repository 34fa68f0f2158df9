use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::notification::ToastProvider;
use crate::components::reveal::{observer_or_fallback, reveal_all, scroll_to_section, ScrollReveal};
use crate::config;
use crate::content::{use_content, ContentCatalog};
use crate::sections::{
    ebook::EbookShowcase, footer::Footer, hero::Hero, lead_magnet::LeadMagnet, story::Story,
    testimonials::Testimonials,
};

#[derive(Properties, PartialEq)]
pub struct SectionsProps {
    pub content: Rc<ContentCatalog>,
}

/// The six page sections in their fixed order.
#[function_component(Sections)]
pub fn sections(props: &SectionsProps) -> Html {
    let content = &props.content;
    let scroll_to_ebook = Callback::from(|_: ()| scroll_to_section(config::EBOOK_SECTION_ID));

    html! {
        <div class="sparkle-home">
            <Hero copy={content.hero.clone()} on_cta_click={scroll_to_ebook} />
            <Story copy={content.story.clone()} brand={content.brand.clone()} />
            <div id={config::EBOOK_SECTION_ID}>
                <EbookShowcase copy={content.ebook.clone()} />
            </div>
            <Testimonials copy={content.testimonials.clone()} />
            <LeadMagnet copy={content.lead_magnet.clone()} />
            <Footer copy={content.footer.clone()} brand={content.brand.clone()} />
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_content();
    use_title(config::PAGE_TITLE.to_string());

    // Reveal sections as they scroll in; the observer is released on unmount
    use_effect_with_deps(
        move |_| {
            let reveal = observer_or_fallback(
                ScrollReveal::observe(config::REVEAL_SELECTOR, config::REVEAL_THRESHOLD),
                || reveal_all(config::REVEAL_SELECTOR),
            );
            move || drop(reveal)
        },
        (),
    );

    html! {
        <ToastProvider>
            <Sections {content} />

            <style>
                {r#"
                    @import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@600;700&family=Poppins:wght@400;500;600&display=swap');

                    body {
                        margin: 0;
                        font-family: "Poppins", -apple-system, BlinkMacSystemFont, sans-serif;
                        color: #1f2937;
                    }
                    .display-font { font-family: "Playfair Display", Georgia, serif; }
                    .section { padding: 6rem 1.5rem; }
                    .section-title {
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 3rem;
                    }
                    .gradient-bg { background: linear-gradient(135deg, #ec4899 0%, #a855f7 100%); }
                    .gradient-text {
                        background: linear-gradient(90deg, #ec4899, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .btn-sparkle {
                        background: linear-gradient(90deg, #ec4899, #a855f7);
                        color: #ffffff;
                        border: none;
                        border-radius: 9999px;
                        font-weight: 600;
                        cursor: pointer;
                        box-shadow: 0 10px 20px rgba(168, 85, 247, 0.25);
                        transition: transform 0.3s, box-shadow 0.3s, opacity 0.3s;
                    }
                    .btn-sparkle:hover:not(:disabled) {
                        transform: scale(1.05);
                        box-shadow: 0 14px 28px rgba(168, 85, 247, 0.35);
                    }
                    .btn-sparkle:disabled { opacity: 0.6; cursor: not-allowed; }
                    .badge {
                        display: inline-block;
                        padding: 0.25rem 0.9rem;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                        font-weight: 600;
                        background: linear-gradient(90deg, #fce7f3, #f3e8ff);
                        color: #7e22ce;
                    }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #f472b6, #c084fc);
                        color: #ffffff;
                        font-weight: 700;
                        font-size: 1.125rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </ToastProvider>
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <ToastProvider>
                <Sections content={Rc::new(ContentCatalog::sammy_sparkle())} />
            </ToastProvider>
        }
    }

    async fn render_page() -> String {
        yew::ServerRenderer::<Harness>::new().render().await
    }

    fn collect_strings(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
            Value::Object(fields) => fields.values().for_each(|v| collect_strings(v, out)),
            _ => {}
        }
    }

    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    #[tokio::test]
    async fn every_catalog_string_is_rendered() {
        let page = render_page().await;
        let catalog = serde_json::to_value(ContentCatalog::sammy_sparkle()).unwrap();
        let mut strings = Vec::new();
        collect_strings(&catalog, &mut strings);
        assert!(!strings.is_empty());

        let missing: Vec<&String> = strings
            .iter()
            .filter(|s| !page.contains(s.as_str()) && !page.contains(&escaped(s)))
            .collect();
        assert!(missing.is_empty(), "not rendered: {:?}", missing);
    }

    #[tokio::test]
    async fn rendering_twice_gives_identical_markup() {
        assert_eq!(render_page().await, render_page().await);
    }

    #[tokio::test]
    async fn sections_render_in_fixed_order() {
        let page = render_page().await;
        let catalog = ContentCatalog::sammy_sparkle();
        let anchors = [
            catalog.hero.headline.as_str(),
            catalog.story.heading.as_str(),
            catalog.ebook.title.as_str(),
            catalog.testimonials.heading.as_str(),
            catalog.lead_magnet.title.as_str(),
            catalog.footer.signature.as_str(),
        ];
        let positions: Vec<usize> = anchors
            .iter()
            .map(|anchor| page.find(anchor).unwrap_or_else(|| panic!("missing {anchor}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", positions);
    }

    #[tokio::test]
    async fn ebook_showcase_sits_inside_the_scroll_anchor() {
        let page = render_page().await;
        let anchor = page
            .find(&format!("id=\"{}\"", config::EBOOK_SECTION_ID))
            .expect("ebook anchor rendered");
        let title = page.find(&ContentCatalog::sammy_sparkle().ebook.title).unwrap();
        let testimonials = page.find(&ContentCatalog::sammy_sparkle().testimonials.heading).unwrap();
        assert!(anchor < title && title < testimonials);
    }
}
