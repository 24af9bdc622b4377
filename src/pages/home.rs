use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::fade_in::FadeInSection;
use crate::components::hero_slider::HeroSlider;
use crate::components::product_card::ProductCard;
use crate::config::SiteConfig;
use crate::contact::whatsapp_url;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = &props.config;
    let phone: AttrValue = config.contact_phone.clone().into();
    let year = chrono::Local::now().year();

    html! {
        <main class="landing" id="home">
            <HeroSlider slides={config.slides.clone()} interval_ms={config.autoplay_interval_ms} />

            <FadeInSection id="products" class={classes!("products-section")}>
                <h2>{"Our products"}</h2>
                <p class="section-lead">
                    {"Everything you need to generate, store and use your own power."}
                </p>
                <div class="product-grid">
                    {
                        config.products.iter().map(|product| html! {
                            <ProductCard product={product.clone()} contact_phone={phone.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            </FadeInSection>

            <FadeInSection id="about" class={classes!("about-section")}>
                <h2>{"Why go solar with us"}</h2>
                <div class="about-grid">
                    <div class="about-item">
                        <h4>{"Sized for your home"}</h4>
                        <p>{"We survey your roof and your usage before recommending a system, so you only pay for what you need."}</p>
                    </div>
                    <div class="about-item">
                        <h4>{"Certified installers"}</h4>
                        <p>{"Every installation is done by our own trained technicians and checked before switch-on."}</p>
                    </div>
                    <div class="about-item">
                        <h4>{"Support that picks up"}</h4>
                        <p>{"Message us any time on WhatsApp. We answer questions before and long after you buy."}</p>
                    </div>
                </div>
            </FadeInSection>

            <FadeInSection id="contact" class={classes!("contact-section")}>
                <h2>{"Talk to us"}</h2>
                <p>{"Tell us about your home and we will put together a quote."}</p>
                <a
                    class="cta-button"
                    href={whatsapp_url(&config.contact_phone, None)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Chat on WhatsApp"}
                </a>
            </FadeInSection>

            <footer class="site-footer">
                <p>{format!("© {} {}", year, config.brand)}</p>
                <a href="#home">{"Back to top"}</a>
            </footer>

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    font-family: "Inter", "Segoe UI", sans-serif;
                    background: #f7f8fa;
                    color: #1c2330;
                }

                body.nav-open {
                    overflow: hidden;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(16, 22, 31, 0.92);
                    backdrop-filter: blur(8px);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #f5b400;
                    font-weight: 700;
                    font-size: 1.3rem;
                    text-decoration: none;
                }

                .nav-menu {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .nav-link {
                    color: #ffffff;
                    text-decoration: none;
                }

                .hamburger {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .hamburger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .hamburger.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .hamburger.open span:nth-child(2) { opacity: 0; }
                .hamburger.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

                @media (max-width: 767px) {
                    .hamburger {
                        display: flex;
                    }

                    .nav-menu {
                        position: fixed;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: #10161f;
                        transform: translateY(-120%);
                        transition: transform 0.3s ease;
                    }

                    .nav-menu.open {
                        transform: translateY(0);
                    }

                    .nav-menu li {
                        padding: 1rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                }

                .landing {
                    padding-top: 64px;
                }

                .cta-button,
                .btn-primary,
                .btn-secondary {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 6px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }

                .cta-button,
                .btn-primary {
                    background: #f5b400;
                    color: #10161f;
                    border: none;
                }

                .btn-secondary {
                    background: transparent;
                    color: #10161f;
                    border: 2px solid #10161f;
                }

                .fade-in-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .fade-in-section.hidden {
                    opacity: 0;
                    transform: translateY(40px);
                }

                .fade-in-section.visible {
                    opacity: 1;
                    transform: none;
                }

                .section-lead {
                    color: #5a6475;
                    margin-bottom: 2.5rem;
                }

                .product-grid,
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }

                .product-card {
                    background: #ffffff;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 6px 24px rgba(16, 22, 31, 0.08);
                }

                .product-card img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                }

                .product-card__body {
                    padding: 1.5rem;
                }

                .product-card .price {
                    display: block;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .product-card__actions {
                    display: flex;
                    gap: 0.8rem;
                }

                .site-footer {
                    background: #10161f;
                    color: #9aa4b5;
                    padding: 2rem;
                    text-align: center;
                }

                .site-footer a {
                    color: #f5b400;
                }
                "#}
            </style>
        </main>
    }
}
