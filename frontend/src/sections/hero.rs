use yew::prelude::*;

use crate::content::HeroCopy;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub copy: HeroCopy,
    pub on_cta_click: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick = {
        let on_cta_click = props.on_cta_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_cta_click.emit(());
        })
    };

    html! {
        <section class="hero-section">
            <div class="hero-sparkles" aria-hidden="true">
                <span class="sparkle sparkle-one">{"✨"}</span>
                <span class="sparkle sparkle-two">{"💫"}</span>
                <span class="sparkle sparkle-three">{"⭐"}</span>
            </div>

            <div class="hero-content">
                <h1 class="display-font hero-headline">{&props.copy.headline}</h1>
                <p class="hero-subheadline">{&props.copy.subheadline}</p>
                <button class="btn-sparkle hero-cta" {onclick}>
                    {&props.copy.cta_text}
                </button>
                <p class="hero-trust">{&props.copy.trust_line}</p>
            </div>

            <style>
                {r#"
                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        background: linear-gradient(135deg, #fdf2f8 0%, #faf5ff 50%, #ffffff 100%);
                        padding: 0 1.5rem;
                    }
                    .hero-sparkles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.3;
                    }
                    .sparkle {
                        position: absolute;
                        animation: pulse 6s ease-in-out infinite;
                    }
                    .sparkle-one { top: 5rem; left: 2.5rem; font-size: 1.25rem; }
                    .sparkle-two { bottom: 5rem; right: 2.5rem; font-size: 1.1rem; animation-delay: 2s; }
                    .sparkle-three { top: 10rem; right: 5rem; font-size: 0.9rem; animation-delay: 4s; }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    .hero-content {
                        max-width: 64rem;
                        margin: 0 auto;
                        text-align: center;
                        position: relative;
                        z-index: 2;
                    }
                    .hero-headline {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 700;
                        color: #111827;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subheadline {
                        font-size: 1.25rem;
                        color: #374151;
                        max-width: 48rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .hero-cta {
                        font-size: 1.125rem;
                        padding: 1rem 2.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-trust {
                        font-size: 0.875rem;
                        color: #4b5563;
                        font-weight: 500;
                    }
                "#}
            </style>
        </section>
    }
}
