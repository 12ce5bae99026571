//! Site content as static data.
//!
//! DESIGN
//! ======
//! Copy, project cards, skill entries, and contact links are lifted out of
//! the markup so section components stay mechanical and the content can be
//! checked independently of rendering.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_OWNER: &str = "Thomas Vergne";

pub const SITE_DESCRIPTION: &str = "A web developer and computer science student in France. \
    Passionate about math, I create innovative web solutions and new programming languages.";

pub const CONTACT_EMAIL: &str = "contact@thomas-vergne.fr";

/// A showcased project card.
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub link_label: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        name: "Le Don Vert",
        description: "Le Don Vert is a French website for plant exchanges between private \
            individuals. It allows you to contribute to making the planet greener.",
        link: "https://ledonvert.org",
        link_label: "Discover the website",
    },
    Project {
        name: "Plume",
        description: "Plume is a programming language I created. It allows simple, efficient \
            programming, with features such as an extension system, custom data types and more.",
        link: "https://plume-lang.org",
        link_label: "Discover the language",
    },
];

/// A skill entry with the tools it leans on.
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

pub static SKILLS: [Skill; 2] = [
    Skill {
        title: "Building web front-end applications",
        description: "I've been creating web applications for several years now, using a wide \
            variety of technologies. I specialize mainly in front-end development, where I \
            combine aesthetics and functionality to deliver exceptional user experiences. My \
            expertise keeps me up to date with the latest trends and innovations in the field.",
        tools: &["Tailwind CSS", "React", "Typescript", "Remix"],
    },
    Skill {
        title: "Implementing domain-specific languages",
        description: "I tailor languages for the most specific needs. To do this, I use Haskell, \
            a powerful functional language that enables me to create them efficiently and \
            elegantly. Thanks to Haskell, I can design innovative solutions tailored to the \
            unique requirements of each project.",
        tools: &["Haskell"],
    },
];

/// An external profile link in the contact section.
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com/thomasvergne" },
    SocialLink { label: "Discord", href: "https://discordapp.com/users/766231131720646666" },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/thomasvrgn/" },
];

/// In-page anchors for the aside navigation.
pub static NAV_LINKS: [(&str, &str); 5] = [
    ("home", "/"),
    ("about", "#about"),
    ("projects", "#projects"),
    ("skills", "#skills"),
    ("contact", "#contact"),
];
