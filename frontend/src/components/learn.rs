use yew::prelude::*;

use crate::components::reveal::{reveal_class, use_in_view};
use crate::navigation::section::LEARN;

const FEATURES: [(&str, &str); 3] = [
    ("Your schedule", "No fixed timetables. Learn when you want."),
    ("Real people", "Practitioners, not just educators."),
    ("Track growth", "Skill levels, history, rep. All in one."),
];

struct Progress {
    label: &'static str,
    pct: u8,
    color: &'static str,
}

const PROGRESS: [Progress; 3] = [
    Progress { label: "React", pct: 78, color: "#a3e635" },
    Progress { label: "UI Design", pct: 54, color: "#22d3ee" },
    Progress { label: "Spanish", pct: 31, color: "#f59e0b" },
];

#[function_component(Learn)]
pub fn learn() -> Html {
    let (node, revealed) = use_in_view(0.15);

    html! {
        <section id={LEARN} class="learn-section" ref={node}>
            <div class={reveal_class(revealed)}>
                <h2>{"Learn anything, "}<span class="accent">{"at your pace."}</span></h2>
                <ul class="learn-features">
                    {
                        FEATURES.iter().map(|(title, desc)| html! {
                            <li key={*title}>
                                <strong>{*title}</strong>
                                <span>{*desc}</span>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>

            <div class={classes!(reveal_class(revealed), "learn-card")}>
                <div class="live-session">
                    <span class="live-dot"></span>{"Live now"}
                    <div class="tutor">
                        <strong>{"Marco T."}</strong>
                        <span>{"Teaching React"}</span>
                    </div>
                    <button class="join">{"Join session →"}</button>
                </div>
                <h3>{"Your progress"}</h3>
                {
                    PROGRESS.iter().enumerate().map(|(i, p)| {
                        let width = if revealed { p.pct } else { 0 };
                        let style = format!(
                            "width: {}%; background: {}; transition-delay: {}s;",
                            width,
                            p.color,
                            0.2 + i as f64 * 0.15
                        );
                        html! {
                            <div class="progress" key={p.label}>
                                <div class="progress-label">
                                    <span>{p.label}</span>
                                    <span style={format!("color: {}", p.color)}>{format!("{}%", p.pct)}</span>
                                </div>
                                <div class="progress-track">
                                    <div class="progress-fill" {style}></div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()
                }
                <div class="learn-footer">
                    <span><strong>{"4.9"}</strong>{" avg rating"}</span>
                    <span><strong>{"50k+"}</strong>{" Swaps done"}</span>
                    <span class="accent">{"Free to start"}</span>
                </div>
            </div>

            <style>
                {r#"
                .learn-section {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    padding: 8rem 4rem;
                }
                .learn-section h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 3rem;
                }
                .learn-features {
                    list-style: none;
                    padding: 0;
                }
                .learn-features li {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.5rem;
                }
                .learn-features span {
                    color: #a3a3a3;
                }
                .learn-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .live-dot {
                    display: inline-block;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #ef4444;
                    margin-right: 0.5rem;
                }
                .join {
                    background: #a3e635;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1rem;
                }
                .progress {
                    margin-bottom: 1rem;
                }
                .progress-label {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    color: #a3a3a3;
                }
                .progress-track {
                    height: 6px;
                    background: #262626;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    border-radius: 9999px;
                    transition: width 1.2s cubic-bezier(0.25, 1, 0.5, 1);
                }
                .learn-footer {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                }
                @media (max-width: 900px) {
                    .learn-section {
                        grid-template-columns: 1fr;
                        padding: 6rem 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
