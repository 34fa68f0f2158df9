use yew::prelude::*;

use crate::content::{BrandCopy, StoryCopy};

#[derive(Properties, PartialEq)]
pub struct StoryProps {
    pub copy: StoryCopy,
    pub brand: BrandCopy,
}

#[function_component(Story)]
pub fn story(props: &StoryProps) -> Html {
    let StoryProps { copy, brand } = props;

    html! {
        <section id="about" class="section story-section fade-in">
            <div class="story-inner">
                <h2 class="display-font section-title">{&copy.heading}</h2>

                <div class="story-card">
                    <blockquote class="story-text">{format!("\"{}\"", copy.text)}</blockquote>
                    <div class="story-author">
                        <div class="avatar">{brand.initial()}</div>
                        <div class="story-author-text">
                            <p class="story-author-name">{&brand.name}</p>
                            <p class="story-author-role">{&copy.author_role}</p>
                        </div>
                    </div>
                </div>

                <div class="story-stats">
                    { for copy.stats.iter().map(|stat| html! {
                        <div class="story-stat">
                            <div class="gradient-text story-stat-value">{&stat.value}</div>
                            <p class="story-stat-label">{&stat.label}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .story-section { background: #ffffff; }
                    .story-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .story-card {
                        background: linear-gradient(135deg, #fdf2f8, #faf5ff);
                        border-radius: 1.5rem;
                        padding: 3rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    }
                    .story-text {
                        font-size: 1.2rem;
                        color: #374151;
                        line-height: 1.7;
                        margin: 0 0 1.5rem;
                    }
                    .story-author {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .story-author-text { text-align: left; }
                    .story-author-name { font-weight: 600; color: #1f2937; margin: 0; }
                    .story-author-role { font-size: 0.875rem; color: #4b5563; margin: 0; }
                    .story-stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .story-stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .story-stat-label { color: #4b5563; font-weight: 500; }
                "#}
            </style>
        </section>
    }
}
