use yew::prelude::*;

use crate::components::countries::COUNTRY_LIST;
use crate::components::reveal::{reveal_class, use_in_view};
use crate::navigation::section::MISSION;

#[function_component(OurMission)]
pub fn our_mission() -> Html {
    let (node, revealed) = use_in_view(0.15);
    let (media, media_revealed) = use_in_view(0.2);
    let highlighted = &COUNTRY_LIST[0];

    html! {
        <section id={MISSION} class="mission-section" ref={node}>
            <div class={classes!(reveal_class(revealed), "mission-copy")}>
                <span class="eyebrow">{"About Us"}</span>
                <h2>{"Our "}<span class="accent">{"Mission"}</span></h2>
                <p>
                    {"Our mission is to make quality education accessible, empowering learners to grow, explore, and achieve their goals through collaborative skill exchange."}
                </p>
                <ul class="mission-points">
                    <li>{"⚡ Instantly Studiable"}</li>
                    <li>{"📚 Community curated paths"}</li>
                    <li>{"🤝 One hour taught, one hour learned"}</li>
                </ul>
            </div>

            <div class={classes!(reveal_class(media_revealed), "mission-media")} ref={media}>
                <video src="/assets/mission-library.mp4" autoplay=true muted=true loop=true playsinline=true></video>
                <div class="mission-badge">
                    <span class="flag">{highlighted.flag}</span>
                    <div>
                        <strong>{highlighted.name}</strong>
                        <span>{"Students Helped"}</span>
                    </div>
                    <strong class="accent">{highlighted.learners}</strong>
                    <span>{"active learners"}</span>
                </div>
            </div>

            <style>
                {r#"
                .mission-section {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    padding: 8rem 3rem;
                    font-family: 'Space Grotesk', sans-serif;
                    background: linear-gradient(135deg, #1a1d29 0%, #0d0d0d 40%, #1a1d29 70%, #15314d 100%);
                    border-top: 2px solid rgba(163, 230, 53, 0.3);
                    border-bottom: 2px solid rgba(163, 230, 53, 0.3);
                }
                .mission-copy h2 {
                    font-size: 3rem;
                }
                .mission-copy p {
                    color: #a3a3a3;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .mission-points {
                    list-style: none;
                    padding: 0;
                }
                .mission-points li {
                    margin-bottom: 0.75rem;
                }
                .mission-media {
                    position: relative;
                    order: -1;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .mission-media video {
                    width: 100%;
                    display: block;
                }
                .mission-badge {
                    position: absolute;
                    right: 1rem;
                    bottom: 1rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border-radius: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(12px);
                }
                .mission-badge span {
                    display: block;
                    color: #a3a3a3;
                    font-size: 0.75rem;
                }
                @media (max-width: 900px) {
                    .mission-section {
                        grid-template-columns: 1fr;
                        padding: 6rem 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
