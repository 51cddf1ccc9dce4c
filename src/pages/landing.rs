//! The Quizzler landing page: fixed section structure plus all the scroll
//! driven behaviors wired up on mount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::behavior::{counter, keyboard, parallax, reveal, scroll};
use crate::components::download::DownloadButton;
use crate::components::modal::DownloadModal;
use crate::components::nav::Nav;
use crate::components::progress::ScrollProgress;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "fas fa-brain",
        "Adaptive Assessments",
        "Questions adjust to each learner in real time, backed by models reaching 82% prediction accuracy.",
    ),
    (
        "fas fa-route",
        "Personalized Learning Paths",
        "Every student gets a study plan built from their own strengths and gaps, not a one-size syllabus.",
    ),
    (
        "fas fa-bullseye",
        "Focus Mode",
        "Distraction-free study sessions that keep attention where the material is.",
    ),
    (
        "fas fa-shield-alt",
        "Secure Exam Mode",
        "Anti-cheating measures keep graded assessments honest, on any device.",
    ),
];

const TECH_MODELS: [(&str, &str); 5] = [
    ("Decision Tree", "82% accuracy"),
    ("Support Vector Machine", "78% accuracy"),
    ("Bayesian Network", "80% accuracy"),
    ("RNN-LSTM", "MSE 0.05"),
    ("K-Nearest Neighbors", "80% accuracy"),
];

const BENEFITS: [(&str, &str); 3] = [
    (
        "15% Higher Test Scores",
        "Students using adaptive paths scored measurably better across pilot cohorts.",
    ),
    (
        "Deeper Engagement",
        "Shorter, targeted sessions keep learners coming back on their own.",
    ),
    (
        "Better Outcomes",
        "Teachers see gaps earlier and close them before exam season.",
    ),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "Quizzler found the exact topics I kept getting wrong and drilled me until they stuck.",
        "Final-year engineering student",
    ),
    (
        "The secure exam mode let us run assessments remotely without second-guessing the results.",
        "Faculty member, TCET Mumbai",
    ),
];

const TEAM: [(&str, &str); 4] = [
    ("Aarav Sharma", "Machine Learning Lead"),
    ("Priya Patel", "Android Lead"),
    ("Rohan Mehta", "Backend & Infrastructure"),
    ("Ananya Iyer", "Product & Design"),
];

const STATS: [(&str, &str); 4] = [
    ("82", "% Prediction Accuracy"),
    ("5", "AI Models"),
    ("15", "% Score Improvement"),
    ("12500", "Practice Questions Served"),
];

const PARTICLE_COUNT: usize = 6;

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);
    let header_ref = use_node_ref();
    let scroll_lock = use_mut_ref(|| false);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Reveal and counter observers live for the lifetime of the page.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let reveals = reveal::observe_reveals(&document);
                let counters = counter::observe_counters(&document);
                move || {
                    drop(reveals);
                    drop(counters);
                }
            },
            (),
        );
    }

    // Particle parallax, recomputed on every scroll event.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    parallax::apply(&document, scroll_y);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Arrow-key section navigation.
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let handle = keyboard::attach(&document);
                move || drop(handle)
            },
            (),
        );
    }

    // Fade the page in once everything has loaded.
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let mark_loaded = {
                    let document = document.clone();
                    move || {
                        if let Some(body) = document.body() {
                            let _ = body.class_list().add_1("loaded");
                        }
                    }
                };

                let mut load_callback = None;
                if document.ready_state() == "complete" {
                    mark_loaded();
                } else {
                    let callback =
                        Closure::wrap(Box::new(mark_loaded) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    load_callback = Some(callback);
                }

                move || {
                    if let Some(callback) = load_callback {
                        let _ = window.remove_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let navigate = {
        let scroll_lock = scroll_lock.clone();
        let header_ref = header_ref.clone();
        Callback::from(move |fragment: &'static str| {
            let header = header_ref.cast::<HtmlElement>();
            scroll::attempt_scroll(fragment, header.as_ref(), &scroll_lock);
        })
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let anchor_click = {
        let navigate = navigate.clone();
        move |fragment: &'static str| {
            let navigate = navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                navigate.emit(fragment);
            })
        }
    };

    html! {
        <div class="landing">
            <ScrollProgress />
            <Nav header_ref={header_ref.clone()} on_navigate={navigate.clone()} />

            <main>
                <section id="home" class="hero section">
                    <div class="hero__particles">
                        { for (0..PARTICLE_COUNT).map(|index| html! {
                            <span class="particle" key={index}></span>
                        }) }
                    </div>
                    <div class="hero__content container">
                        <h1 class="hero__title">{"Learn Smarter with Quizzler"}</h1>
                        <p class="hero__subtitle">
                            {"AI-powered assessments that adapt to the way you learn, \
                              built by students for students."}
                        </p>
                        <div class="hero__buttons">
                            <DownloadButton
                                label="Download App"
                                on_open_modal={open_modal.clone()}
                            />
                            <a
                                href="#features"
                                class="btn btn--outline"
                                onclick={anchor_click("#features")}
                            >
                                {"Explore Features"}
                            </a>
                        </div>
                        <div class="hero__stats">
                            { for STATS.iter().map(|(target, label)| html! {
                                <div class="stat" key={*target}>
                                    <span class="stat__number" data-target={*target}>{"0"}</span>
                                    <span class="stat__label">{ *label }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="features" class="features section">
                    <div class="container">
                        <h2 class="section__title">{"Why Quizzler"}</h2>
                        <div class="features__grid">
                            { for FEATURES.iter().enumerate().map(|(index, (icon, title, body))| html! {
                                <div
                                    class="feature-card"
                                    key={*title}
                                    style={format!("animation-delay: {:.1}s", index as f64 * 0.2)}
                                >
                                    <i class={classes!("feature-card__icon", icon.split(' ').collect::<Vec<_>>())}></i>
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="technology" class="technology section">
                    <div class="container">
                        <h2 class="section__title">{"Five Models, One Engine"}</h2>
                        <p class="section__subtitle">
                            {"Every answer you give feeds an ensemble of classifiers \
                              that decide what you should see next."}
                        </p>
                        <div class="technology__grid">
                            { for TECH_MODELS.iter().map(|(name, metric)| html! {
                                <div class="tech-card" key={*name}>
                                    <i class="tech-card__icon fas fa-microchip"></i>
                                    <h3>{ *name }</h3>
                                    <span class="tech-card__metric">{ *metric }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="results" class="results section">
                    <div class="container">
                        <h2 class="section__title">{"Results That Hold Up"}</h2>
                        <div class="results__benefits">
                            { for BENEFITS.iter().map(|(title, body)| html! {
                                <div class="benefit" key={*title}>
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            }) }
                        </div>
                        <div class="results__testimonials">
                            { for TESTIMONIALS.iter().map(|(quote, who)| html! {
                                <blockquote class="testimonial" key={*who}>
                                    <p>{ format!("\u{201c}{}\u{201d}", quote) }</p>
                                    <cite>{ *who }</cite>
                                </blockquote>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="team" class="team section">
                    <div class="container">
                        <h2 class="section__title">{"The Team"}</h2>
                        <p class="section__subtitle">
                            {"Thakur College of Engineering & Technology, Mumbai"}
                        </p>
                        <div class="team__grid">
                            { for TEAM.iter().map(|(name, role)| html! {
                                <div class="team-card" key={*name}>
                                    <i class="team-card__avatar fas fa-user-circle"></i>
                                    <h3>{ *name }</h3>
                                    <span class="team-card__role">{ *role }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="download" class="download section">
                    <div class="container">
                        <h2 class="section__title">{"Get Quizzler"}</h2>
                        <p class="section__subtitle">
                            {"The Android app is on its way to Google Play. \
                              Grab the demo info while you wait."}
                        </p>
                        <DownloadButton
                            label="Download for Android"
                            on_open_modal={open_modal.clone()}
                        />
                    </div>
                </section>
            </main>

            <footer class="footer">
                <div class="container footer__content">
                    <div class="footer__brand">
                        <h3><i class="fas fa-brain"></i> {" Quizzler"}</h3>
                        <p>{"Personalized learning powered by five AI models."}</p>
                    </div>
                    <ul class="footer__links">
                        <li><a href="#home" onclick={anchor_click("#home")}>{"Home"}</a></li>
                        <li><a href="#features" onclick={anchor_click("#features")}>{"Features"}</a></li>
                        <li><a href="#technology" onclick={anchor_click("#technology")}>{"Technology"}</a></li>
                        <li><a href="#team" onclick={anchor_click("#team")}>{"Team"}</a></li>
                    </ul>
                    <p class="footer__copyright">
                        {"\u{a9} 2025 Quizzler \u{b7} Thakur College of Engineering & Technology, Mumbai"}
                    </p>
                </div>
            </footer>

            {
                if *modal_open {
                    html! { <DownloadModal on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    :root {
                        --color-bg: #0f1115;
                        --color-surface: #1a1d24;
                        --color-text: #f2f4f8;
                        --color-text-secondary: #9aa3b2;
                        --color-primary: #21808d;
                        --color-primary-hover: #2aa0b0;
                        --color-success: #2e9e5b;
                        --color-card-border: rgba(255, 255, 255, 0.08);
                    }

                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        background: var(--color-bg);
                        color: var(--color-text);
                        font-family: "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        opacity: 0;
                        transition: opacity 0.5s ease-in-out;
                    }

                    body.loaded {
                        opacity: 1;
                    }

                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .section {
                        padding: 6rem 0;
                    }

                    .section__title {
                        font-size: 2.2rem;
                        margin: 0 0 1rem 0;
                        text-align: center;
                    }

                    .section__subtitle {
                        color: var(--color-text-secondary);
                        text-align: center;
                        max-width: 600px;
                        margin: 0 auto 3rem auto;
                    }

                    /* Header */

                    .header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 1000;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(10px);
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }

                    .header.scrolled {
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(20px);
                    }

                    .nav {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 64px;
                    }

                    .nav__logo {
                        color: var(--color-text);
                        font-weight: 700;
                        font-size: 1.2rem;
                        text-decoration: none;
                    }

                    .nav__menu {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .nav__link {
                        color: var(--color-text);
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.2s ease;
                    }

                    .nav__link:hover {
                        color: var(--color-primary-hover);
                    }

                    .nav__toggle {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--color-text);
                        font-size: 1.3rem;
                        cursor: pointer;
                    }

                    @media (max-width: 768px) {
                        .nav__toggle {
                            display: block;
                        }

                        .nav__menu {
                            position: fixed;
                            top: 64px;
                            right: 0;
                            flex-direction: column;
                            background: var(--color-surface);
                            width: 70%;
                            max-width: 300px;
                            height: calc(100vh - 64px);
                            padding: 2rem;
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                        }

                        .nav__menu.active {
                            transform: translateX(0);
                        }
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: radial-gradient(circle at 20% 30%, rgba(33, 128, 141, 0.25), transparent 50%),
                                    radial-gradient(circle at 80% 70%, rgba(42, 160, 176, 0.18), transparent 50%);
                    }

                    .hero__particles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }

                    .particle {
                        position: absolute;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: var(--color-primary);
                        opacity: 0.35;
                    }

                    .particle:nth-child(1) { top: 15%; left: 10%; }
                    .particle:nth-child(2) { top: 30%; left: 80%; width: 14px; height: 14px; }
                    .particle:nth-child(3) { top: 55%; left: 25%; width: 6px; height: 6px; }
                    .particle:nth-child(4) { top: 70%; left: 65%; }
                    .particle:nth-child(5) { top: 40%; left: 45%; width: 8px; height: 8px; }
                    .particle:nth-child(6) { top: 85%; left: 85%; width: 12px; height: 12px; }

                    .hero__title {
                        font-size: 3rem;
                        margin: 0 0 1rem 0;
                    }

                    .hero__subtitle {
                        color: var(--color-text-secondary);
                        font-size: 1.2rem;
                        max-width: 540px;
                        margin: 0 0 2rem 0;
                    }

                    .hero__buttons {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                        margin-bottom: 3.5rem;
                    }

                    .hero__stats {
                        display: flex;
                        gap: 2.5rem;
                        flex-wrap: wrap;
                    }

                    .stat {
                        display: flex;
                        flex-direction: column;
                    }

                    .stat__number {
                        font-size: 2.2rem;
                        font-weight: 700;
                        color: var(--color-primary-hover);
                    }

                    .stat__label {
                        color: var(--color-text-secondary);
                        font-size: 0.9rem;
                    }

                    /* Buttons */

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.8rem 1.6rem;
                        border-radius: 8px;
                        border: none;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }

                    .btn--primary {
                        background: var(--color-primary);
                        color: var(--color-text);
                    }

                    .btn--primary:hover:enabled {
                        background: var(--color-primary-hover);
                    }

                    .btn--primary:disabled {
                        cursor: default;
                        opacity: 0.85;
                    }

                    .btn--outline {
                        background: transparent;
                        border: 1px solid var(--color-primary);
                        color: var(--color-text);
                    }

                    .btn--outline:hover {
                        background: rgba(33, 128, 141, 0.15);
                    }

                    .btn--full-width {
                        width: 100%;
                        justify-content: center;
                    }

                    .download-btn--done {
                        background: var(--color-success);
                    }

                    /* Cards and reveal animation */

                    .features__grid,
                    .team__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 1.5rem;
                    }

                    .technology__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
                        gap: 1.5rem;
                    }

                    .feature-card,
                    .tech-card,
                    .team-card,
                    .benefit,
                    .testimonial {
                        background: var(--color-surface);
                        border: 1px solid var(--color-card-border);
                        border-radius: 12px;
                        padding: 1.8rem;
                        opacity: 0;
                    }

                    .feature-card.animate,
                    .tech-card.animate,
                    .team-card.animate,
                    .benefit.animate,
                    .testimonial.animate {
                        animation: fadeInUp 0.6s ease forwards;
                    }

                    @keyframes fadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .feature-card:hover {
                        border-color: var(--color-primary);
                        box-shadow: 0 15px 30px rgba(33, 128, 141, 0.25);
                    }

                    .feature-card__icon,
                    .tech-card__icon {
                        font-size: 1.8rem;
                        color: var(--color-primary);
                    }

                    .tech-card {
                        text-align: center;
                    }

                    .tech-card:hover {
                        box-shadow: 0 15px 30px rgba(33, 128, 141, 0.3);
                    }

                    .tech-card__metric {
                        color: var(--color-primary-hover);
                        font-weight: 600;
                    }

                    .results__benefits {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 2.5rem;
                    }

                    .results__testimonials {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .testimonial {
                        margin: 0;
                        font-style: italic;
                    }

                    .testimonial cite {
                        display: block;
                        margin-top: 1rem;
                        color: var(--color-text-secondary);
                        font-style: normal;
                        font-size: 0.9rem;
                    }

                    .team-card {
                        text-align: center;
                    }

                    .team-card__avatar {
                        font-size: 3rem;
                        color: var(--color-text-secondary);
                    }

                    .team-card__role {
                        color: var(--color-text-secondary);
                        font-size: 0.9rem;
                    }

                    .download.section {
                        text-align: center;
                    }

                    /* Footer */

                    .footer {
                        background: var(--color-surface);
                        border-top: 1px solid var(--color-card-border);
                        padding: 3rem 0;
                    }

                    .footer__content {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        align-items: center;
                        text-align: center;
                    }

                    .footer__brand p {
                        color: var(--color-text-secondary);
                        margin: 0.5rem 0 0 0;
                    }

                    .footer__links {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .footer__links a {
                        color: var(--color-text-secondary);
                        text-decoration: none;
                    }

                    .footer__links a:hover {
                        color: var(--color-primary-hover);
                    }

                    .footer__copyright {
                        color: var(--color-text-secondary);
                        font-size: 0.85rem;
                        margin: 0;
                    }
                "#}
            </style>
        </div>
    }
}
