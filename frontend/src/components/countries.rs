use yew::prelude::*;

use crate::components::reveal::{reveal_class, use_in_view};
use crate::navigation::section::COUNTRIES;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// Display figure such as "12.5K".
    pub learners: &'static str,
    pub skill: &'static str,
    pub region: &'static str,
    /// Display figure such as "+8.2%".
    pub growth: &'static str,
    pub last_active: &'static str,
}

const fn country(
    code: &'static str,
    name: &'static str,
    flag: &'static str,
    learners: &'static str,
    skill: &'static str,
    region: &'static str,
    growth: &'static str,
    last_active: &'static str,
) -> Country {
    Country { code, name, flag, learners, skill, region, growth, last_active }
}

pub const COUNTRY_LIST: [Country; 12] = [
    country("US", "United States", "🇺🇸", "12.5K", "Web Dev", "Americas", "+8.2%", "2m ago"),
    country("UK", "United Kingdom", "🇬🇧", "8.3K", "Design", "Europe", "+5.7%", "1m ago"),
    country("IN", "India", "🇮🇳", "15.7K", "AI / ML", "Asia", "+12.4%", "3m ago"),
    country("DE", "Germany", "🇩🇪", "6.2K", "Engineering", "Europe", "+4.1%", "5m ago"),
    country("JP", "Japan", "🇯🇵", "9.8K", "Game Dev", "Asia", "+6.9%", "2m ago"),
    country("BR", "Brazil", "🇧🇷", "7.1K", "UX Design", "Americas", "+9.3%", "4m ago"),
    country("CA", "Canada", "🇨🇦", "5.4K", "Blockchain", "Americas", "+7.8%", "1m ago"),
    country("AU", "Australia", "🇦🇺", "4.9K", "Video & Photo", "Oceania", "+3.5%", "6m ago"),
    country("FR", "France", "🇫🇷", "4.2K", "Marketing", "Europe", "+5.2%", "2m ago"),
    country("SG", "Singapore", "🇸🇬", "3.8K", "Fintech", "Asia", "+11.6%", "1m ago"),
    country("KR", "South Korea", "🇰🇷", "3.5K", "Animation", "Asia", "+4.7%", "3m ago"),
    country("MX", "Mexico", "🇲🇽", "3.2K", "Mobile Dev", "Americas", "+6.1%", "4m ago"),
];

/// Leading number of a display figure ("12.5K" -> 12.5, "+8.2%" -> 8.2).
/// Anything unparseable counts as zero.
fn leading_number(figure: &str) -> f64 {
    let trimmed = figure.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && matches!(*c, '+' | '-'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerStats {
    /// Sum of the learner figures, in thousands.
    pub total_learners: f64,
    /// Mean growth percentage.
    pub average_growth: f64,
}

pub fn ticker_stats(countries: &[Country]) -> TickerStats {
    let total: f64 = countries.iter().map(|c| leading_number(c.learners)).sum();
    let average = if countries.is_empty() {
        0.0
    } else {
        countries.iter().map(|c| leading_number(c.growth)).sum::<f64>() / countries.len() as f64
    };
    TickerStats {
        total_learners: total,
        average_growth: average,
    }
}

#[function_component(GlobalLearners)]
pub fn global_learners() -> Html {
    let (node, revealed) = use_in_view(0.08);
    let stats = ticker_stats(&COUNTRY_LIST);

    let card = |c: &Country| {
        html! {
            <div class="country-card" key={c.code}>
                <div class="country-head">
                    <span class="flag">{c.flag}</span>
                    <div>
                        <strong>{c.name}</strong>
                        <span class="region">{c.region}</span>
                    </div>
                    <span class="last-active">{c.last_active}</span>
                </div>
                <div class="country-figures">
                    <div><span>{"Learners"}</span><strong>{c.learners}</strong></div>
                    <div><span>{"Growth"}</span><strong class="accent">{c.growth}</strong></div>
                    <div><span>{"Skill"}</span><strong>{c.skill}</strong></div>
                </div>
            </div>
        }
    };

    html! {
        <section id={COUNTRIES} class="countries-section" ref={node}>
            <div class={reveal_class(revealed)}>
                <span class="eyebrow">{"GLOBAL NETWORK"}</span>
                <h2>{"Learners in every "}<span class="accent">{"time zone"}</span></h2>
                <div class="ticker-stats">
                    <div><strong>{format!("{:.1}K", stats.total_learners)}</strong><span>{"Total Learners"}</span></div>
                    <div><strong>{COUNTRY_LIST.len()}</strong><span>{"Countries"}</span></div>
                    <div><strong>{format!("+{:.1}%", stats.average_growth)}</strong><span>{"Avg Growth"}</span></div>
                </div>
            </div>

            <div class="ticker">
                // the list is rendered twice so the marquee can loop seamlessly
                <div class="ticker-track">
                    { COUNTRY_LIST.iter().map(card).collect::<Html>() }
                    <div class="ticker-copy" aria-hidden="true">
                        { COUNTRY_LIST.iter().map(card).collect::<Html>() }
                    </div>
                </div>
            </div>

            <button class="explore">{"Explore Global Network"}</button>

            <style>
                {r#"
                .countries-section {
                    padding: 8rem 0;
                    text-align: center;
                    background: linear-gradient(to bottom, #0a0a0a 0%, #0f0f15 50%, #0a0a0a 100%);
                    overflow: hidden;
                }
                .eyebrow {
                    color: #a3e635;
                    letter-spacing: 0.2em;
                    font-size: 0.75rem;
                }
                .countries-section h2 {
                    font-family: 'Syne', sans-serif;
                    font-size: 3rem;
                }
                .ticker-stats {
                    display: flex;
                    justify-content: center;
                    gap: 4rem;
                    margin: 2rem 0 4rem;
                }
                .ticker-stats div {
                    display: flex;
                    flex-direction: column;
                }
                .ticker-stats strong {
                    font-size: 2rem;
                }
                .ticker-stats span {
                    color: #a3a3a3;
                    font-size: 0.8rem;
                }
                .ticker-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    animation: ticker 60s linear infinite;
                }
                .ticker-track:hover {
                    animation-play-state: paused;
                }
                .ticker-copy {
                    display: flex;
                    gap: 1.5rem;
                }
                @keyframes ticker {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .country-card {
                    width: 320px;
                    flex-shrink: 0;
                    padding: 1.5rem;
                    text-align: left;
                    border-radius: 1.25rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .country-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .country-head .flag {
                    font-size: 2rem;
                }
                .country-head .region, .country-head .last-active {
                    display: block;
                    color: #737373;
                    font-size: 0.75rem;
                }
                .country-head .last-active {
                    margin-left: auto;
                }
                .country-figures {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.25rem;
                }
                .country-figures span {
                    display: block;
                    color: #737373;
                    font-size: 0.7rem;
                }
                .explore {
                    margin-top: 4rem;
                    background: none;
                    color: #ffffff;
                    border: 1px solid rgba(163, 230, 53, 0.4);
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    cursor: pointer;
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
    fn reads_display_figures() {
        assert_eq!(leading_number("12.5K"), 12.5);
        assert_eq!(leading_number("+8.2%"), 8.2);
        assert_eq!(leading_number("-1.5%"), -1.5);
        assert_eq!(leading_number(" 3K "), 3.0);
        assert_eq!(leading_number("n/a"), 0.0);
        assert_eq!(leading_number(""), 0.0);
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summarises_the_country_list() {
        let stats = ticker_stats(&COUNTRY_LIST);
        assert!(close(stats.total_learners, 84.6), "{stats:?}");
        assert!(close(stats.average_growth, 85.5 / 12.0), "{stats:?}");
    }

    #[test]
    fn unparseable_figures_count_as_zero() {
        let mut countries = COUNTRY_LIST[..2].to_vec();
        countries[1].learners = "lots";
        countries[1].growth = "?";
        let stats = ticker_stats(&countries);
        assert!(close(stats.total_learners, 12.5));
        assert!(close(stats.average_growth, 4.1));
    }

    #[test]
    fn empty_list_has_zero_stats() {
        assert_eq!(
            ticker_stats(&[]),
            TickerStats {
                total_learners: 0.0,
                average_growth: 0.0,
            }
        );
    }
}
