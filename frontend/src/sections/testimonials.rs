use yew::prelude::*;

use crate::content::TestimonialsCopy;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub copy: TestimonialsCopy,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let copy = &props.copy;

    html! {
        <section id="testimonials" class="section testimonials-section fade-in">
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <h2 class="display-font section-title">{&copy.heading}</h2>
                    <p class="testimonials-subheading">{&copy.subheading}</p>
                </div>

                <div class="testimonials-grid">
                    { for copy.items.iter().map(|testimonial| html! {
                        <div key={testimonial.id} class="testimonial-card">
                            <div class="stars">
                                { for (0..5).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <blockquote class="testimonial-text">
                                {format!("\"{}\"", testimonial.text)}
                            </blockquote>
                            <div class="testimonial-author">
                                <div class="avatar">{testimonial.initial()}</div>
                                <p class="testimonial-name">{&testimonial.author}</p>
                                <p class="testimonial-verified">{&copy.verified_label}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="testimonials-proof">
                    <div class="testimonials-proof-box">
                        <p class="gradient-text testimonials-proof-headline">{&copy.proof_headline}</p>
                        <p class="testimonials-proof-note">{&copy.proof_note}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .testimonials-section { background: #ffffff; }
                    .testimonials-inner { max-width: 72rem; margin: 0 auto; }
                    .testimonials-header { text-align: center; margin-bottom: 4rem; }
                    .testimonials-subheading {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }
                    .testimonial-card {
                        background: linear-gradient(135deg, #ffffff, #faf5ff);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .testimonial-card:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    }
                    .testimonial-card .star { color: #facc15; }
                    .testimonial-text {
                        color: #374151;
                        text-align: center;
                        font-style: italic;
                        margin: 0 0 1.5rem;
                    }
                    .testimonial-author { text-align: center; }
                    .testimonial-author .avatar { margin: 0 auto 0.75rem; }
                    .testimonial-name { font-weight: 600; color: #1f2937; margin: 0; }
                    .testimonial-verified { font-size: 0.875rem; color: #6b7280; margin: 0; }
                    .testimonials-proof { text-align: center; margin-top: 4rem; }
                    .testimonials-proof-box {
                        display: inline-block;
                        background: linear-gradient(90deg, #fce7f3, #f3e8ff);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .testimonials-proof-headline { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .testimonials-proof-note { color: #4b5563; }
                "#}
            </style>
        </section>
    }
}
