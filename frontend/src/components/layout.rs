use yew::prelude::*;

use crate::background::AnimatedBackground;
use crate::components::cookie_banner::CookieBanner;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::scroll::ScrollToTop;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site-root">
            <style>{SITE_STYLES}</style>
            <AnimatedBackground />
            <div class="site-content">
                <ScrollToTop />
                <Header />
                <main class="site-main">
                    { for props.children.iter() }
                </main>
                <Footer />
                <CookieBanner />
            </div>
        </div>
    }
}

const SITE_STYLES: &str = r#"
    :root {
        --primary: #5606ff;
        --accent: #fe8989;
        --dark: #0a0a0a;
        --border: rgba(255, 255, 255, 0.08);
    }
    body {
        margin: 0;
        background: var(--dark);
        color: #e5e5e5;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    a { color: inherit; }
    .site-root { position: relative; min-height: 100vh; }
    .animated-background {
        position: fixed;
        inset: 0;
        width: 100%;
        height: 100%;
        pointer-events: none;
        z-index: 0;
    }
    .site-content {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        min-height: 100vh;
    }
    .site-main { flex: 1; padding-top: 64px; }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
    .section { padding: 5rem 0; }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        background: rgba(10, 10, 10, 0.5);
        backdrop-filter: blur(16px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.04);
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(10, 10, 10, 0.9);
        backdrop-filter: blur(24px);
        border-bottom: 1px solid var(--border);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 64px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo-image { height: 36px; transition: opacity 0.3s ease; }
    .nav-logo-image.hidden { opacity: 0; }
    .nav-right { display: flex; align-items: center; gap: 0.25rem; }
    .nav-link {
        text-decoration: none;
        color: #9ca3af;
        font-size: 0.875rem;
        padding: 0.375rem 0.75rem;
        border-radius: 0.5rem;
    }
    .nav-link:hover { color: #fff; background: rgba(255, 255, 255, 0.03); }
    .nav-link.active { color: #fff; background: rgba(255, 255, 255, 0.06); }
    .nav-social { color: #9ca3af; text-decoration: none; padding: 0.5rem; font-size: 0.875rem; }
    .nav-cta {
        text-decoration: none;
        background: var(--primary);
        color: #fff;
        padding: 0.45rem 1rem;
        border-radius: 0.5rem;
        font-weight: 500;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span { width: 24px; height: 2px; background: #9ca3af; }
    @media (max-width: 1024px) {
        .burger-menu { display: flex; }
        .nav-right {
            display: none;
            position: fixed;
            top: 64px;
            left: 0;
            right: 0;
            bottom: 0;
            flex-direction: column;
            align-items: stretch;
            padding: 1.5rem;
            background: rgba(10, 10, 10, 0.98);
        }
        .nav-right.mobile-menu-open { display: flex; }
        .nav-link { display: block; font-size: 1.125rem; padding: 1rem; }
    }

    .hero { min-height: 90vh; display: flex; align-items: center; text-align: center; }
    .hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.08; color: #fff; margin-bottom: 1.5rem; }
    .hero h1 .highlight { color: var(--accent); }
    .hero-subtitle { font-size: 1.2rem; color: #9ca3af; max-width: 42rem; margin: 0 auto 2.5rem; }
    .badge {
        display: inline-block;
        padding: 0.4rem 1rem;
        border-radius: 999px;
        border: 1px solid var(--border);
        background: rgba(255, 255, 255, 0.03);
        font-size: 0.85rem;
        color: #9ca3af;
        margin-bottom: 1.5rem;
    }
    .cta-group { display: flex; gap: 0.75rem; justify-content: center; flex-wrap: wrap; }
    .button-primary, .button-secondary {
        text-decoration: none;
        padding: 0.8rem 1.6rem;
        border-radius: 0.75rem;
        font-weight: 500;
    }
    .button-primary { background: var(--primary); color: #fff; }
    .button-secondary { border: 1px solid rgba(255, 255, 255, 0.1); color: #d1d5db; background: rgba(255, 255, 255, 0.02); }

    .stats-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        max-width: 36rem;
        margin: 5rem auto 0;
    }
    .stat-counter {
        background: rgba(255, 255, 255, 0.02);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 0.75rem;
        padding: 1rem;
        text-align: center;
    }
    .stat-value { font-size: 1.9rem; font-weight: 500; color: #fff; }
    .stat-label { font-size: 0.75rem; color: #6b7280; }

    .section-header { text-align: center; max-width: 48rem; margin: 0 auto 3rem; }
    .section-header h2, .section-header h1 { color: #fff; font-size: clamp(2rem, 4vw, 3rem); }
    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
    .card {
        background: rgba(10, 10, 10, 0.85);
        border: 1px solid var(--border);
        border-radius: 1rem;
        padding: 2rem;
        height: 100%;
        box-sizing: border-box;
    }
    .card h3 { color: #fff; margin-top: 0; }
    .card ul { padding-left: 1.2rem; color: #9ca3af; }
    .card li { margin-bottom: 0.4rem; }
    .cta-box { max-width: 48rem; margin: 0 auto; text-align: center; }

    .faq-item { margin-bottom: 1rem; }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.1rem;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
        padding: 0;
    }
    .faq-answer { max-height: 0; opacity: 0; overflow: hidden; transition: all 0.3s ease-in-out; color: #d1d5db; }
    .faq-item.open .faq-answer { max-height: 24rem; opacity: 1; padding-top: 1rem; }
    .toggle-icon { color: var(--accent); transition: transform 0.3s ease; }
    .faq-item.open .toggle-icon { transform: rotate(180deg); }

    .contact-card { max-width: 42rem; margin: 0 auto; }
    .contact-form .form-group { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.5rem; }
    .contact-form input, .contact-form textarea {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid var(--border);
        border-radius: 0.5rem;
        color: #fff;
        padding: 0.75rem;
        font: inherit;
    }
    .captcha-container { display: flex; justify-content: center; margin-bottom: 1.5rem; }
    .form-status { padding: 1rem; border-radius: 0.5rem; margin-bottom: 1.5rem; font-size: 0.9rem; }
    .form-status.success { background: rgba(34, 197, 94, 0.1); border: 1px solid rgba(34, 197, 94, 0.2); color: #86efac; }
    .form-status.error { background: rgba(239, 68, 68, 0.1); border: 1px solid rgba(239, 68, 68, 0.2); color: #fca5a5; }
    .submit-button {
        width: 100%;
        padding: 0.9rem;
        border: none;
        border-radius: 0.75rem;
        background: var(--primary);
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
    }
    .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
    .form-warning { color: #d97706; text-align: center; font-size: 0.9rem; }

    .legal-page { max-width: 48rem; margin: 0 auto; line-height: 1.7; }
    .legal-page h1, .legal-page h2 { color: #fff; }
    .legal-links { margin-top: 2rem; text-align: center; color: #6b7280; }
    .consent-status { color: #d1d5db; }

    .about-hero { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
    .about-hero h1 { color: #fff; font-size: clamp(2.5rem, 5vw, 3.75rem); }
    .about-image { width: 100%; border-radius: 1rem; object-fit: cover; }
    .gallery-hint { text-align: center; color: #6b7280; font-size: 0.875rem; }
    .gallery { display: flex; gap: 1.5rem; overflow-x: auto; scroll-snap-type: x mandatory; padding-bottom: 2rem; }
    .gallery-item { flex-shrink: 0; scroll-snap-align: center; width: min(800px, 85vw); }
    .gallery-item img { width: 100%; aspect-ratio: 1100 / 800; object-fit: contain; border-radius: 1rem; background: #111; }
    .included-list { text-align: left; max-width: 28rem; margin: 1.5rem auto; color: #d1d5db; }
    .disclaimer { padding-bottom: 4rem; text-align: center; font-size: 0.75rem; color: #6b7280; max-width: 48rem; }
    .contact-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
    .info-card { padding: 1.25rem; margin-bottom: 1rem; height: auto; }
    .info-title { color: #fff; font-weight: 600; }
    .info-content a { color: var(--accent); }
    .info-subtitle { color: #6b7280; font-size: 0.85rem; }
    .not-found { min-height: 60vh; display: flex; align-items: center; }
    .not-found-code { font-size: 6rem; color: var(--primary); margin: 0; }
    .book-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
    .book-grid h2 { color: #fff; }
    .faq-static { height: auto; margin-bottom: 1rem; }
    .faq-static h3 { color: #fff; }
    @media (max-width: 1024px) {
        .about-hero, .contact-grid, .book-grid { grid-template-columns: 1fr; }
    }

    .site-footer { background: var(--dark); border-top: 1px solid var(--border); padding: 3rem 1.5rem 1.5rem; }
    .footer-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-grid ul { list-style: none; padding: 0; }
    .footer-grid li { margin-bottom: 0.75rem; font-size: 0.875rem; }
    .footer-grid a { text-decoration: none; color: #9ca3af; }
    .footer-logo { height: 48px; }
    .footer-social { display: flex; gap: 1rem; margin-top: 1.5rem; }
    .footer-bottom { text-align: center; color: #6b7280; font-size: 0.8rem; margin-top: 2rem; }
    @media (max-width: 768px) {
        .footer-grid { grid-template-columns: 1fr; }
        .stats-grid { gap: 0.75rem; }
    }

    .cookie-banner {
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1.5rem;
        background: rgba(255, 255, 255, 0.96);
        color: #111827;
        border-top: 1px solid #e5e7eb;
        box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.25);
        animation: cookieSlideUp 0.4s ease-out;
    }
    @keyframes cookieSlideUp {
        from { transform: translateY(100px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .cookie-banner-content { max-width: 72rem; margin: 0 auto; display: flex; gap: 1rem; align-items: center; }
    .cookie-text { flex: 1; font-size: 0.875rem; color: #4b5563; }
    .cookie-text h3 { color: #111827; margin-top: 0; }
    .cookie-more { background: none; border: none; color: var(--primary); text-decoration: underline; cursor: pointer; padding: 0; }
    .cookie-details { background: #f9fafb; padding: 1rem; border-radius: 0.5rem; }
    .cookie-links { display: flex; gap: 0.75rem; margin-top: 0.75rem; }
    .cookie-links a { color: var(--primary); }
    .cookie-actions { display: flex; gap: 0.5rem; }
    .cookie-button { padding: 0.6rem 1.2rem; border-radius: 0.5rem; cursor: pointer; font-weight: 500; }
    .cookie-button.primary { background: var(--primary); color: #fff; border: none; }
    .cookie-button.secondary { background: #fff; color: #111827; border: 1px solid #d1d5db; }
    @media (max-width: 768px) {
        .cookie-banner-content { flex-direction: column; align-items: stretch; }
    }
"#;
