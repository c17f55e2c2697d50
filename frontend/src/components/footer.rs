use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::{reveal_class, use_in_view};
use crate::config::SUBSCRIBE_CONFIRMATION_MS;
use crate::navigation::section::CTA;

const FOOTER_LINKS: [(&str, [&str; 4]); 4] = [
    ("Product", ["Features", "Pricing", "Success Stories", "API"]),
    ("Company", ["About Us", "Careers", "Blog", "Press"]),
    ("Resources", ["Help Center", "Community", "Guidelines", "Developers"]),
    ("Legal", ["Privacy Policy", "Terms of Service", "Cookie Policy", "GDPR"]),
];

const SOCIAL_LINKS: [(&str, &str); 5] = [
    ("𝕏", "X (Twitter)"),
    ("in", "LinkedIn"),
    ("📷", "Instagram"),
    ("▶", "YouTube"),
    ("💬", "Discord"),
];

const STATS: [(&str, &str); 4] = [
    ("50K+", "Active Learners"),
    ("200+", "Expert Tutors"),
    ("1000+", "Courses"),
    ("98%", "Success Rate"),
];

/// Newsletter signups are a placeholder: nothing leaves the page, a
/// non-blank address only earns the confirmation message.
pub fn accepts_subscription(email: &str) -> bool {
    !email.trim().is_empty()
}

/// Runs `confirm` only for an accepted address.
pub fn submit_subscription(email: &str, confirm: impl FnOnce()) -> bool {
    let accepted = accepts_subscription(email);
    if accepted {
        confirm();
    }
    accepted
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let (node, revealed) = use_in_view(0.1);
    let email = use_state(String::new);
    let subscribed = use_state(|| false);

    // armed per submit, dropping it cancels the pending hide
    let hide_confirmation = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_subscription(&email, || {
                subscribed.set(true);
                email.set(String::new());
                let hide = subscribed.setter();
                *hide_confirmation.borrow_mut() =
                    Some(Timeout::new(SUBSCRIBE_CONFIRMATION_MS, move || hide.set(false)));
            });
        })
    };

    html! {
        <footer id={CTA} class="site-footer" ref={node}>
            <div class={classes!(reveal_class(revealed), "footer-stats")}>
                {
                    STATS.iter().map(|(value, label)| html! {
                        <div key={*label}>
                            <strong class="accent">{*value}</strong>
                            <span>{*label}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class={classes!(reveal_class(revealed), "newsletter")}>
                <h3>{"Start swapping today"}</h3>
                <p>{"New courses and community highlights, Delivered Weekly."}</p>
                <form {onsubmit}>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        {oninput}
                    />
                    <button type="submit">{"Subscribe"}</button>
                </form>
                {
                    if *subscribed {
                        html! { <p class="subscribed">{"Thanks! You're on the list."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="footer-links">
                <div class="footer-brand">
                    <span class="nav-logo">{"Skill"}<span class="accent">{"Swap"}</span></span>
                    <div class="social">
                        {
                            SOCIAL_LINKS.iter().map(|(icon, label)| html! {
                                <a href="#" key={*label} aria-label={*label}>{*icon}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                {
                    FOOTER_LINKS.iter().map(|(heading, links)| html! {
                        <div class="footer-column" key={*heading}>
                            <h4>{*heading}</h4>
                            { links.iter().map(|link| html! { <a href="#" key={*link}>{*link}</a> }).collect::<Html>() }
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <p class="copyright">{"© 2025 SkillSwap. All rights reserved."}</p>

            <style>
                {r#"
                .site-footer {
                    padding: 6rem 4rem 2rem;
                    background: linear-gradient(135deg, #0a0a0a 0%, #1a1d29 50%, #0f1419 100%);
                }
                .footer-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .footer-stats strong {
                    display: block;
                    font-size: 2.25rem;
                }
                .footer-stats span {
                    color: #a3a3a3;
                    font-size: 0.85rem;
                }
                .newsletter {
                    margin: 5rem auto;
                    max-width: 32rem;
                    text-align: center;
                }
                .newsletter form {
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter input {
                    flex: 1;
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                }
                .newsletter button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #a3e635;
                    color: #000000;
                    font-weight: 600;
                    cursor: pointer;
                }
                .subscribed {
                    color: #a3e635;
                }
                .footer-links {
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-column a, .social a {
                    color: #a3a3a3;
                    text-decoration: none;
                }
                .social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .copyright {
                    margin-top: 3rem;
                    text-align: center;
                    color: #737373;
                    font-size: 0.8rem;
                }
                @media (max-width: 900px) {
                    .site-footer {
                        padding: 4rem 2rem 2rem;
                    }
                    .footer-stats, .footer-links {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_addresses_are_not_accepted() {
        assert!(!accepts_subscription(""));
        assert!(!accepts_subscription("   "));
        assert!(accepts_subscription("ada@example.com"));
        assert!(accepts_subscription(" ada@example.com "));
    }

    #[test]
    fn confirmation_is_armed_only_by_an_accepted_submit() {
        let mut armed = 0;
        assert!(!submit_subscription("  ", || armed += 1));
        assert_eq!(armed, 0);
        assert!(submit_subscription("ada@example.com", || armed += 1));
        assert!(submit_subscription("bob@example.com", || armed += 1));
        assert_eq!(armed, 2);
    }
}
