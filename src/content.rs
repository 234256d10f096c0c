//! Literal page content. Nothing here changes at runtime.

use crate::icons::Icon;

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta {
    title: "Allan Tavolaro | QA Engineer Pleno & Arquiteto de Automação",
    description: "Portfólio de um QA Engineer Pleno especializado em Automação e Sistemas de Alta Performance.",
};

/// Section ids targeted by in-page links.
pub mod sections {
    pub const HERO: &str = "inicio";
    pub const PROJECTS: &str = "projetos";
    pub const SKILLS: &str = "habilidades";
    pub const CONTACT: &str = "contato";

    pub const ALL: [&str; 4] = [HERO, PROJECTS, SKILLS, CONTACT];
}

pub const NAV_LABELS: [&str; 4] = ["Início", "Projetos", "Habilidades", "Contato"];

pub mod links {
    pub const EMAIL: &str = "mailto:allantavolaro@hotmail.com";
    pub const GITHUB: &str = "https://github.com/AllanTavolaro";
    pub const LINKEDIN: &str = "https://www.linkedin.com/in/allan--tavolaro/";
}

pub const STATUS_BADGE: &str = "SISTEMA ONLINE // V2.0.24";

/// Lines typed out in the hero console panel.
pub const HERO_CONSOLE: [&str; 4] = [
    "const qa = new QA_Engineer();",
    r#"qa.experiencia = "Pleno";"#,
    r#"qa.stack = ["C#", "Cypress", "PW"];"#,
    r#"qa.status = "Disponivel";"#,
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub status: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: Experience = Experience {
    role: "QA Engineer",
    company: "@ Mutant",
    status: "ATIVO AGORA",
    highlights: &[
        "Estratégias em testes automatizados, testes manuais e criação de cenários de teste.",
        "Desenvolvimento de ferramentas internas em C# para mineração de dados (Caça Massa).",
        "Validação de APIs mantendo verificações de qualidade com 99.9% de uptime.",
    ],
};

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub kind: &'static str,
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[Project {
    title: "Caça_Massa.exe",
    description: "Aplicação desktop de alta performance construída em C# WPF para consultas e processamento massivo de dados. Possui operações multi-thread e capacidades de exportação.",
    tech: &["C#", "WPF", ".NET 8", "SQL"],
    kind: "Desktop App",
    link: Some("https://www.linkedin.com/feed/update/urn:li:activity:7388659499882082304/"),
}];

pub struct SkillGroup {
    pub icon: Icon,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        icon: Icon::Code,
        title: "Linguagens",
        skills: &["C#", "TypeScript", "JavaScript", "Python", "SQL"],
    },
    SkillGroup {
        icon: Icon::TestTube,
        title: "Automação",
        skills: &["Cypress", "Playwright", "Selenium", "K6", "JMeter"],
    },
    SkillGroup {
        icon: Icon::Server,
        title: "Backend & API",
        skills: &["Node.js", ".NET", "REST", "GraphQL", "Postman"],
    },
    SkillGroup {
        icon: Icon::Zap,
        title: "Ferramentas",
        skills: &["Git", "Docker", "Jenkins", "Azure DevOps", "Jira"],
    },
];

pub const NOISE_TEXTURE: &str = "noise.svg";

pub const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Geist:wght@100..900&family=Geist+Mono:wght@100..900&family=Orbitron:wght@400..900&family=Rajdhani:wght@300;400;500;600;700&display=swap";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::anchor_id;

    #[test]
    fn test_every_nav_label_has_a_section() {
        for label in NAV_LABELS {
            let id = anchor_id(label);
            assert!(sections::ALL.contains(&id.as_str()), "no section for {label}");
        }
    }

    #[test]
    fn test_section_ids_are_normalized() {
        for id in sections::ALL {
            assert_eq!(anchor_id(id), id);
        }
    }

    #[test]
    fn test_skill_groups_have_unique_tags() {
        for group in SKILL_GROUPS {
            let mut tags = group.skills.to_vec();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), group.skills.len(), "{}", group.title);
        }
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        assert!(links::EMAIL.starts_with("mailto:"));
        for url in [links::GITHUB, links::LINKEDIN]
            .into_iter()
            .chain(PROJECTS.iter().filter_map(|p| p.link))
        {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
