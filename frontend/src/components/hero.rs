use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::section::HERO;

const CONTENT_DELAY_MS: u32 = 100;
const UNDERLINE_DELAY_MS: u32 = 850;

const HERO_STATS: [(&str, &str); 2] = [("100+", "Fields of study"), ("12k", "Active learners")];

const SKILL_CARDS: [(&str, &str); 3] = [
    ("/assets/skill-design.jpg", "Design"),
    ("/assets/skill-coding.jpg", "Coding"),
    ("/assets/skill-marketing.jpg", "Marketing"),
];

const LEARNER_AVATARS: [(&str, &str); 3] = [("#a3e635", "A"), ("#a78bfa", "M"), ("#22d3ee", "P")];

/// Cards deal in one after another once the hero content is visible.
pub fn card_delay_secs(index: usize) -> f64 {
    0.8 + index as f64 * 0.15
}

#[function_component(SearchBar)]
fn search_bar() -> Html {
    let input = use_node_ref();
    let value = use_state(String::new);
    let focused = use_state(|| false);

    let focus_input = {
        let input = input.clone();
        move || {
            if let Some(input) = input.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    };

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    let on_clear = {
        let value = value.clone();
        let focus_input = focus_input.clone();
        Callback::from(move |_: MouseEvent| {
            value.set(String::new());
            focus_input();
        })
    };
    let on_go = Callback::from(move |_: MouseEvent| focus_input());

    html! {
        <div class={classes!("hero-search", focused.then_some("focused"))}>
            <span class="search-icon">{"⌕"}</span>
            <input
                ref={input}
                type="text"
                placeholder="What do you want to learn?"
                value={(*value).clone()}
                {oninput}
                {onfocus}
                {onblur}
            />
            {
                if value.is_empty() {
                    html! {}
                } else {
                    html! { <button type="button" class="search-clear" aria-label="Clear" onclick={on_clear}>{"✕"}</button> }
                }
            }
            <button type="button" class="search-go" aria-label="Search" onclick={on_go}>{"→"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MiniCardsProps {
    visible: bool,
}

#[function_component(MiniCards)]
fn mini_cards(props: &MiniCardsProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    html! {
        <div class="mini-cards">
            <div class="mini-blurb">
                <p class="mini-title">{"Choose what you "}<span class="mini-want">{"want"}</span>{" to learn"}</p>
                <p class="mini-text">
                    {"The best specialists from all over the world are waiting to "}
                    <strong>{"share their knowledge"}</strong>
                    {" with you."}
                </p>
                <div class="mini-learners">
                    {
                        LEARNER_AVATARS.iter().map(|(color, initial)| html! {
                            <span class="avatar" key={*initial} style={format!("background-color: {};", color)}>{*initial}</span>
                        }).collect::<Html>()
                    }
                    <span class="mini-active">{"+12k active"}</span>
                </div>
            </div>
            {
                SKILL_CARDS.iter().enumerate().map(|(index, (image, label))| {
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <div
                            key={*label}
                            class={classes!(
                                "skill-card",
                                props.visible.then_some("dealt"),
                                (*hovered == Some(index)).then_some("hovered"),
                                (index % 2 == 1).then_some("tilt-right"),
                            )}
                            style={format!("transition-delay: {}s;", card_delay_secs(index))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <img src={*image} alt={*label} />
                            <span class="skill-label">{*label}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_state(|| false);
    let underline = use_state(|| false);

    // Timed entrance instead of reveal-on-view, the hero is on screen at load.
    {
        let visible = visible.setter();
        use_timeout(move || visible.set(true), CONTENT_DELAY_MS);
    }
    {
        let underline = underline.setter();
        use_timeout(move || underline.set(true), UNDERLINE_DELAY_MS);
    }

    html! {
        <section id={HERO} class="hero-section">
            <div class={classes!("hero-media", "reveal", visible.then_some("revealed"))}>
                <video autoplay=true muted=true loop=true playsinline=true>
                    <source src="/assets/hero-learning.mp4" />
                </video>
                <span class="live-badge">{"Live sessions happening now"}</span>
                <div class="hero-stats">
                    {
                        HERO_STATS.iter().map(|(number, label)| html! {
                            <div class="hero-stat" key={*label}>
                                <strong>{*number}</strong>
                                <span>{*label}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class={classes!("hero-copy", "reveal", visible.then_some("revealed"))}>
                <span class="hero-badge">{"The skill exchange platform"}</span>
                <h1>
                    {"Swap skills."}<br />
                    <span class="hero-underlined accent">
                        {"Grow faster."}
                        <span class={classes!("hero-underline", underline.then_some("drawn"))}></span>
                    </span>
                </h1>
                <p class="hero-sub">
                    {"Exchange what you know for what you want to learn, with real people, in real time."}
                </p>
                <SearchBar />
                <MiniCards visible={*visible} />
            </div>

            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    padding: 6rem 4rem;
                    background: linear-gradient(135deg, #0d0d0d 0%, #1a1d29 50%, #0f1419 100%);
                }
                .hero-media {
                    position: relative;
                    border-radius: 2rem;
                    overflow: hidden;
                }
                .hero-media video {
                    width: 100%;
                    display: block;
                }
                .live-badge {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.375rem 0.875rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.6);
                    font-size: 0.75rem;
                }
                .hero-stats {
                    display: flex;
                    gap: 2rem;
                    padding: 1.5rem;
                }
                .hero-stat strong {
                    display: block;
                    font-size: 1.75rem;
                }
                .hero-stat span {
                    color: #a3a3a3;
                    font-size: 0.8rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(163, 230, 53, 0.3);
                    color: #a3e635;
                    font-size: 0.8rem;
                }
                .hero-copy h1 {
                    font-family: 'Syne', sans-serif;
                    font-size: 4rem;
                    line-height: 1.05;
                    margin: 1.5rem 0;
                }
                .hero-underlined {
                    position: relative;
                }
                .hero-underline {
                    position: absolute;
                    left: 0;
                    bottom: -0.25rem;
                    height: 4px;
                    width: 0;
                    background: #a3e635;
                    transition: width 1s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .hero-underline.drawn {
                    width: 100%;
                }
                .hero-sub {
                    color: #a3a3a3;
                    font-size: 1.125rem;
                    max-width: 32rem;
                }
                .hero-search {
                    display: flex;
                    margin: 2rem 0 1.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.06);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .hero-search input {
                    flex: 1;
                    background: none;
                    border: none;
                    color: #ffffff;
                    padding: 0.875rem 1.25rem;
                }
                .hero-search {
                    align-items: center;
                    max-width: 32rem;
                    transition: border-color 0.3s, box-shadow 0.3s, transform 0.3s;
                }
                .hero-search.focused {
                    border-color: #a3e635;
                    box-shadow: 0 0 0 3px rgba(163, 230, 53, 0.15);
                    transform: scale(1.02);
                }
                .search-icon {
                    padding-left: 1.25rem;
                    color: #737373;
                }
                .hero-search.focused .search-icon {
                    color: #a3e635;
                }
                .search-clear {
                    background: none;
                    border: none;
                    color: #737373;
                    cursor: pointer;
                }
                .search-go {
                    width: 2.5rem;
                    height: 2.5rem;
                    margin: 0.25rem;
                    background: #a3e635;
                    color: #000000;
                    font-weight: 600;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                }
                .mini-cards {
                    display: flex;
                    align-items: flex-end;
                    gap: 1.25rem;
                }
                .mini-blurb {
                    max-width: 12.5rem;
                    font-size: 0.8rem;
                    color: #737373;
                }
                .mini-title {
                    color: #d4d4d4;
                    font-weight: 600;
                }
                .mini-want {
                    color: #ffffff;
                    border-bottom: 2px solid #a3e635;
                }
                .mini-learners {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .avatar {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.5rem;
                    font-weight: 700;
                    color: #000000;
                }
                .skill-card {
                    position: relative;
                    width: 7rem;
                    height: 10rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    flex-shrink: 0;
                    cursor: pointer;
                    opacity: 0;
                    filter: blur(8px);
                    transform: translateY(40px) rotate(-8deg) scale(0.8);
                    transition: opacity 0.7s, transform 0.7s, filter 0.7s;
                }
                .skill-card.tilt-right {
                    transform: translateY(40px) rotate(8deg) scale(0.8);
                }
                .skill-card.dealt {
                    opacity: 1;
                    filter: blur(0);
                    transform: none;
                }
                .skill-card.dealt.hovered {
                    transform: translateY(-6px) scale(1.04);
                    box-shadow: inset 0 0 0 2px rgba(163, 230, 53, 0.5);
                }
                .skill-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .skill-label {
                    position: absolute;
                    left: 0.75rem;
                    bottom: 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #a3e635;
                }
                @media (max-width: 900px) {
                    .hero-section {
                        grid-template-columns: 1fr;
                        padding: 6rem 2rem;
                    }
                    .hero-copy h1 {
                        font-size: 2.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_dealt_in_order() {
        let delays: Vec<f64> = (0..SKILL_CARDS.len()).map(card_delay_secs).collect();
        assert!((delays[0] - 0.8).abs() < 1e-9);
        assert!((delays[2] - 1.1).abs() < 1e-9);
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
