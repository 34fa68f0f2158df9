use yew::prelude::*;

use crate::content::{BrandCopy, FooterCopy, FooterLink};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub copy: FooterCopy,
    pub brand: BrandCopy,
}

fn render_link(link: &FooterLink) -> Html {
    html! {
        <a href={link.href.clone()} class="footer-link">{&link.label}</a>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { copy, brand } = props;

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-brand-row">
                            <div class="avatar">{brand.initial()}</div>
                            <div>
                                <h3 class="display-font footer-brand-name">{&brand.name}</h3>
                                <p class="footer-brand-role">{&brand.role}</p>
                            </div>
                        </div>
                        <p class="footer-blurb">{&brand.blurb}</p>
                    </div>

                    <div class="footer-quick-links">
                        <h4>{&copy.quick_links_heading}</h4>
                        <ul>
                            { for copy.quick_links.iter().map(|link| html! { <li>{render_link(link)}</li> }) }
                        </ul>
                    </div>

                    <div class="footer-social">
                        <h4>{&copy.social_heading}</h4>
                        { for copy.social_links.iter().map(|social| html! {
                            <div>
                                <a href={social.href()} class="footer-link">
                                    <span class="footer-social-icon">{social.platform.icon()}</span>
                                    {social.label()}
                                </a>
                            </div>
                        }) }
                    </div>
                </div>

                <blockquote class="footer-signature">
                    <p class="display-font gradient-text">{format!("\"{}\"", copy.signature)}</p>
                </blockquote>

                <div class="footer-bottom">
                    <div class="footer-made-with">
                        <span class="footer-heart">{"♥"}</span>
                        <span>{&copy.made_with}</span>
                    </div>
                    <div class="footer-legal">
                        { for copy.legal_links.iter().map(render_link) }
                    </div>
                </div>

                <div class="footer-copyright">{&copy.copyright}</div>
            </div>

            <style>
                {r#"
                    .site-footer { background: #111827; color: #ffffff; }
                    .footer-inner { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-brand-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                    .footer-brand-name { font-size: 1.25rem; font-weight: 700; margin: 0; }
                    .footer-brand-role { font-size: 0.875rem; color: #9ca3af; margin: 0; }
                    .footer-blurb { color: #d1d5db; font-size: 0.875rem; max-width: 20rem; }
                    .footer-quick-links { text-align: center; }
                    .footer-quick-links ul { list-style: none; padding: 0; display: grid; gap: 0.5rem; }
                    .footer-social { text-align: right; display: grid; gap: 0.5rem; font-size: 0.875rem; }
                    .footer-social-icon { margin-right: 0.5rem; }
                    .footer-link { color: #d1d5db; text-decoration: none; transition: color 0.2s; }
                    .footer-link:hover { color: #c084fc; }
                    .footer-signature {
                        border-top: 1px solid #1f2937;
                        padding-top: 2rem;
                        margin: 0 0 2rem;
                        text-align: center;
                        font-size: 1.25rem;
                        font-style: italic;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .footer-heart { color: #f87171; margin-right: 0.5rem; }
                    .footer-legal { display: flex; gap: 1.5rem; }
                    .footer-copyright { text-align: center; margin-top: 1rem; font-size: 0.75rem; color: #6b7280; }
                    @media (max-width: 768px) {
                        .footer-social, .footer-brand { text-align: center; }
                        .footer-brand-row { justify-content: center; }
                    }
                "#}
            </style>
        </footer>
    }
}
