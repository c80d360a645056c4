//! The fixed text of the credits.

use crate::credits::page::{Column, CreditPage};
use crate::texture_loader::ImageId;

/// Donor lines per page before a new page starts.
pub const DONOR_PAGE_SIZE: usize = 15;

/// Team members ordered by last name, founders last: display name, portrait, roles.
const TEAM: &[(&str, &str, &[&str])] = &[
    ("Alexander Grund (Flamefire):", "flamefire", &["Programming", "Quality Assurance"]),
    ("Patrick Haak (Demophobie):", "demophobie", &["Website Administration", "Quality Assurance"]),
    ("Jan-Henrik Kluth (jh):", "jh", &["Programming", "Artificial Intelligence (AI)"]),
    ("Christopher Kuehnel (Spikeone):", "spikeone", &["Additional graphics", "Quality Assurance", "Mapping"]),
    ("Stefan Schüchl (Z-Stef):", "z-stef", &["Website Administration", "Website Programming"]),
    ("Marcus Ströbel (Maqs):", "maqs", &["Programming", "Quality Assurance"]),
    ("Jonas Trampe (NastX):", "nastx", &["Quality Assurance", "Mapping"]),
    (
        "Oliver Siebert (Oliverr):",
        "oliverr",
        &["Project founder", "Project management", "Programming", "Quality Assurance"],
    ),
    (
        "Florian Doersch (FloSoft):",
        "flosoft",
        &[
            "Project founder",
            "Project management",
            "Server management",
            "Programming",
            "Website Administration",
            "Website Programming",
            "Quality Assurance",
            "Finances",
        ],
    ),
];

const CONTRIBUTORS: &[(&str, &[&str])] = &[
    (
        "Additional Programming:",
        &[
            "Ikhar Beq (PoC)",
            "Cat666",
            "Devil",
            "Divan",
            "Christoph Erhardt (Airhardt)",
            "Siegfried Oleg Pammer (siegi44)",
            "Lienhart Woitok (liwo)",
            "",
            "all developers who contributed via Github",
        ],
    ),
    ("Additional Graphics:", &["Marcus Bullin (Parasit)"]),
    (
        "Additional Support:",
        &["Fenan", "Phil Groenewold (Phil333)", "muhahahaha", "Sotham", "Marc Vester (xaser)"],
    ),
];

pub const DONORS: &[&str] = &[
    "various anonymous donators",
    "Bob Kromonos Achten",
    "Alles Adam",
    "Niklas Anders",
    "Christian Arpe",
    "Karsten Backhaus (K-Duke)",
    "Günter Baumann",
    "Felix Becker",
    "Markus Becker",
    "Sebastian Bernhard",
    "Gilles Bordelais",
    "André Brem",
    "Hannes Brüske",
    "Andreas Brüske",
    "Jannes Dirks",
    "Gerrit Eberhardt",
    "Alexander Faber",
    "Niklas Faig",
    "Christopher Flocke",
    "Christopher Funke-Kaiser",
    "Hans Gabathuler",
    "Thomas Georg",
    "Konrad Greinke",
    "Stefan Gunkel",
    "Patrick Haak (Demophobie)",
    "Marius Hacker",
    "Daniel Hampf",
    "Nathan Hall",
    "Christoph Hartmann",
    "Andreas Hauer",
    "Stephan Hesse",
    "Daniel Holle",
    "Rene Hopf",
    "Hanso Hunder",
    "Benjamin Hünig",
    "Dominic Jonas",
    "Simon Jais",
    "Silvio Karbe",
    "Ralli Kasikas",
    "Jörg Kesten",
    "Thorsten Kindel",
    "Holger Klötzner",
    "Andreas Kniep",
    "Vladislav Kolaja",
    "Daniel Krsiak",
    "Andreas Krimm",
    "Christopher Kuehnel (Spikeone)",
    "Alexander Lambio",
    "Oliver Lang",
    "Marius Loewe",
    "Eric Lutter",
    "Jan Montag",
    "Kai Müller",
    "morlock",
    "Jan Mozgawa",
    "Wojciech Pieklik",
    "Mike Plackowski",
    "Daniel Platt",
    "Philip Rau",
    "Ronny Richter",
    "Daniel Seindl",
    "Vasilyev Sergey",
    "Patrick Schefczyk",
    "Marcel Schneider",
    "Alexander Schoedon",
    "Max Skuratov",
    "Philipp Strathausen",
    "Benjamin Stoisch",
    "Felix Stolle",
    "Nina Tillmann",
    "Angelo Tiegs",
    "Niels Wiederanders",
    "Philipp Wohlleben",
];

/// Splits donors over two-column pages.
///
/// The column split point is computed once from the whole list, so every
/// page puts its first `middle` names left and the rest right.
pub fn donor_pages(donors: &[&str]) -> Vec<CreditPage> {
    let blank = || CreditPage::new("Donators").with_last_line("Thank you for your donations!");
    let middle = DONOR_PAGE_SIZE.min(donors.len()) / 2;

    let mut pages = Vec::new();
    let mut page = blank();
    let mut pos = 0;
    for donor in donors {
        let column = if pos < middle { Column::Left } else { Column::Right };
        page.push(*donor, column);
        pos += 1;
        if pos > DONOR_PAGE_SIZE {
            pages.push(std::mem::replace(&mut page, blank()));
            pos = 0;
        }
    }
    if !page.lines.is_empty() {
        pages.push(page);
    }
    pages
}

/// All credits pages in display order. `portrait` resolves a portrait name
/// to a loaded image.
pub fn build_pages(portrait: impl Fn(&str) -> Option<ImageId>) -> Vec<CreditPage> {
    let mut pages = Vec::new();

    for (name, picture, roles) in TEAM {
        let page = roles
            .iter()
            .fold(CreditPage::new(*name), |page, role| page.line(*role))
            .with_image(portrait(*picture));
        pages.push(page);
    }

    for (title, names) in CONTRIBUTORS {
        pages.push(names.iter().fold(CreditPage::new(*title), |page, n| page.line(*n)));
    }

    pages.extend(donor_pages(DONORS));

    pages.push(
        CreditPage::new("We hope you enjoy playing Return To The Roots!")
            .line("Thank you!")
            .with_last_line("THE END"),
    );
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donors_are_split_into_pages_of_sixteen() {
        let donors: Vec<String> = (0..40).map(|i| format!("donor {}", i)).collect();
        let names: Vec<&str> = donors.iter().map(String::as_str).collect();
        let pages = donor_pages(&names);

        assert_eq!(pages.iter().map(|p| p.lines.len()).collect::<Vec<_>>(), vec![16, 16, 8]);
        for page in &pages {
            assert_eq!(page.title, "Donators");
            assert_eq!(page.last_line, "Thank you for your donations!");
            assert!(page.image.is_none());
        }

        // middle = min(15, 40) / 2 = 7 on every page
        assert_eq!(pages[0].column(Column::Left).count(), 7);
        assert_eq!(pages[0].column(Column::Right).count(), 9);
        assert_eq!(pages[2].column(Column::Left).count(), 7);
        assert_eq!(pages[2].column(Column::Right).count(), 1);
        assert_eq!(pages[1].lines[0].text, "donor 16");
    }

    #[test]
    fn few_donors_fit_one_page() {
        let pages = donor_pages(&["a", "b", "c", "d", "e"]);
        assert_eq!(pages.len(), 1);
        let left: Vec<&str> = pages[0].column(Column::Left).map(|l| l.text.as_str()).collect();
        let right: Vec<&str> = pages[0].column(Column::Right).map(|l| l.text.as_str()).collect();
        assert_eq!(left, ["a", "b"]);
        assert_eq!(right, ["c", "d", "e"]);
    }

    #[test]
    fn no_donors_no_pages() {
        assert!(donor_pages(&[]).is_empty());
    }

    #[test]
    fn script_order_and_portraits() {
        let pages = build_pages(|name| (name == "maqs").then_some(ImageId(9)));
        let donor_count = donor_pages(DONORS).len();
        assert_eq!(pages.len(), TEAM.len() + CONTRIBUTORS.len() + donor_count + 1);

        assert_eq!(pages[0].title, "Alexander Grund (Flamefire):");
        assert_eq!(pages[0].lines.len(), 2);
        assert!(pages[0].image.is_none());
        assert_eq!(pages[5].title, "Marcus Ströbel (Maqs):");
        assert_eq!(pages[5].image, Some(ImageId(9)));
        assert_eq!(pages[8].lines.len(), 8);

        assert_eq!(pages[TEAM.len()].title, "Additional Programming:");
        assert!(pages[TEAM.len()].lines.iter().all(|l| l.column == Column::Left));

        let last = pages.last().unwrap();
        assert_eq!(last.last_line, "THE END");
        assert_eq!(last.lines[0].text, "Thank you!");
    }
}
