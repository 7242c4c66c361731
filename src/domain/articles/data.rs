use time::macros::date;

use super::{Article, SeedBlock, SeedImage, SeedSpecGroup};
use crate::domain::types::ArticleIntent;

pub static ARTICLES: [Article; 4] = [
    Article {
        slug: "kia-ev6-vs-hyundai-ioniq-5",
        title: "Kia EV6 vs Hyundai Ioniq 5: Same Platform, Different Answers",
        intent: Some(ArticleIntent::Comparison),
        excerpt: "Two E-GMP siblings with opposite personalities. We charge, load, \
                  and live with both to find out which execution makes more sense.",
        published: date!(2026 - 06 - 12),
        blocks: &[
            SeedBlock::Tldr(&[
                "Both ride on the same 800-volt E-GMP platform and charge at nearly identical speeds",
                "The Ioniq 5 wins on interior space and ride comfort",
                "The EV6 is the one to pick if you care how a crossover steers",
                "Real-world range difference is under 15 miles in mixed driving",
            ]),
            SeedBlock::Markdown(
                "## Shared bones, split personalities\n\n\
                 On paper these two are the same car. Same platform, same usable battery, \
                 the same 800-volt electrical architecture that makes a 10-80% charge a \
                 coffee stop instead of a lunch break.\n\n\
                 Drive them back to back and the shared hardware disappears. The Ioniq 5 \
                 is tuned soft and lounge-like; the EV6 sits lower, steers heavier, and \
                 asks to be hustled.",
            ),
            SeedBlock::Specs {
                title: Some("How they measure up"),
                groups: &[
                    SeedSpecGroup {
                        title: "Powertrain",
                        rows: &[
                            ("Battery (usable)", "77.4 kWh"),
                            ("Drivetrain", "Dual motor AWD"),
                            ("Output", "320 hp / 446 lb-ft"),
                            ("DC fast charge 10-80%", "18 min"),
                        ],
                    },
                    SeedSpecGroup {
                        title: "Practicality",
                        rows: &[
                            ("EPA range (AWD)", "EV6 282 mi / Ioniq 5 269 mi"),
                            ("Cargo behind rear seats", "EV6 24.4 cu ft / Ioniq 5 26.3 cu ft"),
                            ("Wheelbase", "114.2 in / 118.1 in"),
                        ],
                    },
                ],
            },
            SeedBlock::Gallery(&[
                SeedImage {
                    url: "https://images.cambio.example/ev6-front-quarter.jpg",
                    alt: "Kia EV6 front three-quarter view in matte gray",
                    caption: Some("The EV6's fastback stance hides a usable hatch."),
                },
                SeedImage {
                    url: "https://images.cambio.example/ioniq5-profile.jpg",
                    alt: "Hyundai Ioniq 5 side profile showing pixel lighting",
                    caption: None,
                },
            ]),
            SeedBlock::Cta {
                heading: "Still deciding?",
                sub: "Compare live inventory and local lease offers for both cars.",
                href: "https://cambio.example/offers/e-gmp-twins",
                label: "See current offers",
            },
        ],
    },
    Article {
        slug: "corolla-hybrid-vs-civic-hybrid",
        title: "2026 Toyota Corolla Hybrid vs Honda Civic Hybrid",
        intent: Some(ArticleIntent::Comparison),
        excerpt: "The default sensible choice meets the newly electrified Civic. \
                  Efficiency is a wash; the differences are everywhere else.",
        published: date!(2026 - 07 - 03),
        blocks: &[
            SeedBlock::Tldr(&[
                "Both return over 47 mpg combined without trying",
                "The Civic Hybrid is quicker and quieter at highway speed",
                "The Corolla undercuts it by roughly $2,400 comparably equipped",
            ]),
            SeedBlock::Markdown(
                "## The rational-choice rematch\n\n\
                 Compact hybrids used to demand a comfort penalty. Neither of these \
                 does. The Corolla leans on Toyota's fifth-generation hybrid system, \
                 sized for efficiency first; Honda counters with a two-motor setup \
                 that feels closer to an EV around town.\n\n\
                 The price gap is real but narrower than the window sticker suggests \
                 once you match equipment. Decide with your commute: mostly city, the \
                 Corolla's softer calibration is the easier car to live with.",
            ),
            SeedBlock::Specs {
                title: None,
                groups: &[SeedSpecGroup {
                    title: "At a glance",
                    rows: &[
                        ("Combined output", "Corolla 138 hp / Civic 200 hp"),
                        ("EPA combined", "Corolla 50 mpg / Civic 49 mpg"),
                        ("0-60 mph", "Corolla 9.2 s / Civic 6.9 s"),
                    ],
                }],
            },
        ],
    },
    Article {
        slug: "city-ev-charging-guide",
        title: "Charging an EV Without a Driveway: A City Owner's Guide",
        intent: Some(ArticleIntent::Guide),
        excerpt: "No garage, no problem - mostly. How curbside, workplace, and \
                  DC fast charging actually combine for apartment dwellers.",
        published: date!(2026 - 05 - 21),
        blocks: &[
            SeedBlock::Markdown(
                "## Plan around routine, not range\n\n\
                 The owners who struggle are the ones who charge like they fueled: \
                 run low, fill full. Street-parked EVs work the opposite way. Top up \
                 opportunistically - the grocery run, the gym, the two hours at a \
                 workplace plug - and the weekly DC session becomes a fallback, \
                 not a ritual.\n\n\
                 > Rule of thumb: if you can plug in twice a week somewhere you \
                 > already park, you do not need a home charger.",
            ),
            SeedBlock::Tldr(&[
                "Map every L2 plug within three blocks of places you already go",
                "Price DC charging by the month, not the session",
                "A 240V outlet at work beats any public fast charger",
            ]),
        ],
    },
    Article {
        // Imported from the platform's first content batch, before articles
        // carried an intent field.
        slug: "crossover-value-check",
        title: "Compact Crossover Value Check: What $32k Actually Buys",
        intent: None,
        excerpt: "We cross-shop the segment's best sellers at one real transaction \
                  price and count what you give up at each trim.",
        published: date!(2026 - 03 - 02),
        blocks: &[
            SeedBlock::Markdown(
                "## One budget, five badges\n\n\
                 Hold the transaction price at $32,000 even and the segment's \
                 pecking order rearranges itself. Equipment you assume is standard \
                 - power tailgates, blind-spot monitoring, a heated wheel - drops \
                 off different trims at different points.",
            ),
            SeedBlock::Gallery(&[SeedImage {
                url: "https://images.cambio.example/crossover-lineup.jpg",
                alt: "Five compact crossovers parked nose-in at a comparison test",
                caption: Some("Same money, five different answers."),
            }]),
        ],
    },
];
