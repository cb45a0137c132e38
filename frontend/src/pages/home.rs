use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::brainstormer::Brainstormer;
use crate::components::contact_form::ContactForm;
use crate::components::reveal::Reveal;
use crate::components::testimonials::{Testimonial, Testimonials};
use crate::config;
use crate::Route;

struct Project {
    title: &'static str,
    summary: &'static str,
    stack: &'static [&'static str],
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Shelf Life",
        summary: "Pantry tracker that reads receipts and nudges you before food goes off.",
        stack: &["Rust", "Axum", "SQLite"],
    },
    Project {
        title: "Tidewatch",
        summary: "Live tide and swell dashboard for small harbours, fed by public buoy data.",
        stack: &["TypeScript", "React", "Postgres"],
    },
    Project {
        title: "Pocket Ledger",
        summary: "Offline-first expense splitting for trips, synced when the group is back online.",
        stack: &["Kotlin", "Jetpack Compose", "CRDTs"],
    },
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Som turned a napkin sketch into a working product in three weeks. Clear communication the whole way through.",
            author: "Priya N.",
            role: "Founder, Corner Bakery Co.",
        },
        Testimonial {
            quote: "Rock-solid backend work. Our API latency dropped by half after the rewrite.",
            author: "Daniel K.",
            role: "CTO, Fleetline",
        },
        Testimonial {
            quote: "Thoughtful, fast, and genuinely fun to work with. We keep coming back.",
            author: "Maria L.",
            role: "Product Lead, Studio Nine",
        },
    ]
}

/// Styles for the whole page, rendered once by the app shell.
pub const PAGE_STYLES: &str = r#"
    :root {
        --primary: #6c5ce7;
        --primary-dark: #5a4bd1;
        --bg: #0f0f14;
        --surface: rgba(255, 255, 255, 0.05);
        --text: #f1f1f5;
        --muted: #9a9aab;
    }

    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .navbar {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 100;
        padding: 1.5rem 0;
        transition: all 0.3s ease;
    }

    .navbar.sticky {
        padding: 0.75rem 0;
        background: rgba(15, 15, 20, 0.6);
        backdrop-filter: blur(12px);
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
    }

    .nav-content {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo {
        color: var(--text);
        font-size: 1.5rem;
        font-weight: 700;
        text-decoration: none;
    }

    .nav-links {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }

    .nav-link {
        color: var(--muted);
        text-decoration: none;
        transition: color 0.2s ease;
    }

    .nav-link:hover {
        color: var(--text);
    }

    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }

    .burger-menu span {
        width: 24px;
        height: 2px;
        background: var(--text);
    }

    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 2rem;
    }

    .hero h1 {
        font-size: 3.5rem;
        margin-bottom: 1rem;
    }

    .accent {
        color: var(--primary);
    }

    .hero-subtitle {
        color: var(--muted);
        font-size: 1.25rem;
    }

    .hero-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-top: 2rem;
    }

    .section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 5rem 2rem;
    }

    .btn {
        padding: 0.8rem 1.6rem;
        border-radius: 8px;
        border: none;
        font-size: 1rem;
        cursor: pointer;
        text-decoration: none;
        transition: all 0.3s ease;
    }

    .btn:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }

    .btn-primary {
        background: var(--primary);
        color: white;
    }

    .btn-primary:hover:not(:disabled) {
        background: var(--primary-dark);
        transform: translateY(-2px);
    }

    .btn-secondary {
        background: transparent;
        color: var(--text);
        border: 1px solid var(--primary);
    }

    .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
    }

    .project-card {
        background: var(--surface);
        border-radius: 12px;
        padding: 1.5rem;
        height: 100%;
        box-sizing: border-box;
    }

    .project-stack {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        list-style: none;
        padding: 0;
    }

    .project-stack li {
        font-size: 0.8rem;
        padding: 0.2rem 0.6rem;
        border-radius: 999px;
        background: rgba(108, 92, 231, 0.2);
    }

    .ai-input-row {
        display: flex;
        gap: 1rem;
    }

    .ai-input-row input,
    .contact-form input,
    .contact-form textarea {
        flex: 1;
        padding: 0.8rem 1rem;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: var(--surface);
        color: var(--text);
        font-size: 1rem;
        font-family: inherit;
    }

    .loader {
        width: 32px;
        height: 32px;
        margin: 1.5rem auto;
        border: 4px solid rgba(255, 255, 255, 0.1);
        border-top-color: var(--primary);
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }

    @keyframes spin {
        to { transform: rotate(360deg); }
    }

    .ai-results-container {
        margin-top: 1.5rem;
        padding: 1.5rem;
        border-radius: 12px;
        background: var(--surface);
    }

    .ai-results {
        white-space: pre-wrap;
        line-height: 1.6;
    }

    .testimonial-slider {
        position: relative;
        min-height: 200px;
    }

    .testimonial {
        display: none;
        text-align: center;
        animation: fadeIn 0.6s ease;
    }

    .testimonial.active {
        display: block;
    }

    .testimonial-quote {
        font-size: 1.25rem;
        font-style: italic;
    }

    .testimonial-author span {
        display: block;
        color: var(--muted);
        font-size: 0.9rem;
    }

    .testimonial-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
    }

    .dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.2);
    }

    .dot.active {
        background: var(--primary);
    }

    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }

    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 640px;
    }

    .contact-assist {
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .contact-assist .loader {
        margin: 0;
    }

    .reveal {
        opacity: 0;
        transform: translateY(30px);
    }

    .reveal.revealed {
        opacity: 1;
        transform: translateY(0);
    }

    .footer {
        text-align: center;
        padding: 2rem;
        color: var(--muted);
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }

    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }

        .nav-links {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 1rem;
            padding: 1.5rem 2rem;
            background: rgba(15, 15, 20, 0.95);
        }

        .nav-links.mobile-menu-open {
            display: flex;
        }

        .hero h1 {
            font-size: 2.5rem;
        }

        .ai-input-row {
            flex-direction: column;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="portfolio">
            <section id="home" class="hero">
                <Reveal>
                    <h1>{"Hi, I'm "}<span class="accent">{config::DEVELOPER_NAME}</span></h1>
                    <p class="hero-subtitle">
                        {"Full-stack developer building fast, friendly software for small teams."}
                    </p>
                    <div class="hero-actions">
                        <a href="#projects" class="btn btn-primary">{"See my work"}</a>
                        <a href="#contact" class="btn btn-secondary">{"Get in touch"}</a>
                    </div>
                </Reveal>
            </section>

            <section id="about" class="section">
                <Reveal>
                    <h2>{"About Me"}</h2>
                    <p>
                        {"I've spent the last eight years shipping web and mobile products, from first prototype to the boring-but-important parts like monitoring and on-call. I like small teams, clear problems and code that is easy to delete."}
                    </p>
                </Reveal>
            </section>

            <section id="projects" class="section">
                <h2>{"Projects"}</h2>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <Reveal delay_ms={i as u32 * 100}>
                            <div class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <ul class="project-stack">
                                    { for project.stack.iter().map(|tech| html! { <li>{*tech}</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="ai-tools" class="section">
                <Reveal>
                    <h2>{"\u{2728} Project Brainstormer"}</h2>
                    <p>{"Have a rough idea? Describe it and get a starting concept, feature list and tech stack."}</p>
                    <Brainstormer />
                </Reveal>
            </section>

            <section id="testimonials" class="section">
                <Reveal>
                    <h2>{"What Clients Say"}</h2>
                    <Testimonials items={testimonials()} />
                </Reveal>
            </section>

            <section id="contact" class="section">
                <Reveal>
                    <h2>{"Contact"}</h2>
                    <p>{"Tell me about your project. Stuck on wording? Let the assistant polish your draft."}</p>
                    <ContactForm />
                </Reveal>
            </section>

            <footer class="footer">
                <p>{format!("\u{a9} {} {}. All rights reserved.", year, config::DEVELOPER_NAME)}</p>
            </footer>

        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="section" style="min-height: 60vh; padding-top: 10rem; text-align: center;">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back home"}
            </Link<Route>>
        </div>
    }
}
