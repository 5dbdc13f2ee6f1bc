//! Static content rendered by the page sections.
//!
//! Everything here is defined once at compile time and never mutated. Each
//! section owns its own record shape instead of sharing a loosely-typed
//! grab-bag, so a missing field is a compile error rather than a blank spot
//! on the page.

/// Inline SVG glyphs used for UI icons. The rendering markup lives in
/// `app::icons`; unknown icon names are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    ArrowUp,
    Award,
    BarChart,
    Book,
    Briefcase,
    Calendar,
    Check,
    ChevronLeft,
    ChevronRight,
    Cloud,
    Code,
    CreditCard,
    Download,
    ExternalLink,
    GraduationCap,
    Github,
    Heart,
    Instagram,
    Key,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Monitor,
    Phone,
    School,
    Send,
    Server,
    Target,
    Terminal,
    TrendingUp,
    X,
    Zap,
}

/// How a technology tag is drawn: a devicon font class where one exists,
/// otherwise one of our inline glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechIcon {
    Devicon(&'static str),
    Glyph(GlyphKind),
}

/// Every technology tag the site can render. The tag set is closed: adding
/// a new tag means adding a variant and its mapping here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tech {
    React,
    JavaScript,
    Html,
    Css,
    Tailwind,
    Bootstrap,
    MaterialUi,
    JQuery,
    FramerMotion,
    Vite,
    Node,
    Express,
    MongoDb,
    MySql,
    SocketIo,
    Redis,
    Jwt,
    RestApi,
    Cloudinary,
    Stripe,
    Cpp,
    C,
    Python,
    Nltk,
    Streamlit,
    DataStructures,
    Algorithms,
    Git,
    GitHub,
    VsCode,
    Postman,
    Vercel,
    Render,
}

impl Tech {
    pub fn label(self) -> &'static str {
        match self {
            Tech::React => "React.js",
            Tech::JavaScript => "JavaScript",
            Tech::Html => "HTML5",
            Tech::Css => "CSS3",
            Tech::Tailwind => "Tailwind CSS",
            Tech::Bootstrap => "Bootstrap",
            Tech::MaterialUi => "Material UI",
            Tech::JQuery => "jQuery",
            Tech::FramerMotion => "Framer Motion",
            Tech::Vite => "Vite",
            Tech::Node => "Node.js",
            Tech::Express => "Express.js",
            Tech::MongoDb => "MongoDB",
            Tech::MySql => "MySQL",
            Tech::SocketIo => "Socket.IO",
            Tech::Redis => "Redis",
            Tech::Jwt => "JWT",
            Tech::RestApi => "RESTful APIs",
            Tech::Cloudinary => "Cloudinary",
            Tech::Stripe => "Stripe",
            Tech::Cpp => "C++",
            Tech::C => "C",
            Tech::Python => "Python",
            Tech::Nltk => "NLTK",
            Tech::Streamlit => "Streamlit",
            Tech::DataStructures => "Data Structures",
            Tech::Algorithms => "Algorithms",
            Tech::Git => "Git",
            Tech::GitHub => "GitHub",
            Tech::VsCode => "VS Code",
            Tech::Postman => "Postman",
            Tech::Vercel => "Vercel",
            Tech::Render => "Render",
        }
    }

    pub fn icon(self) -> TechIcon {
        match self {
            Tech::React => TechIcon::Devicon("devicon-react-original"),
            Tech::JavaScript => TechIcon::Devicon("devicon-javascript-plain"),
            Tech::Html => TechIcon::Devicon("devicon-html5-plain"),
            Tech::Css => TechIcon::Devicon("devicon-css3-plain"),
            Tech::Tailwind => TechIcon::Devicon("devicon-tailwindcss-original"),
            Tech::Bootstrap => TechIcon::Devicon("devicon-bootstrap-plain"),
            Tech::MaterialUi => TechIcon::Devicon("devicon-materialui-plain"),
            Tech::JQuery => TechIcon::Devicon("devicon-jquery-plain"),
            Tech::FramerMotion => TechIcon::Devicon("devicon-framermotion-original"),
            Tech::Vite => TechIcon::Devicon("devicon-vitejs-plain"),
            Tech::Node => TechIcon::Devicon("devicon-nodejs-plain"),
            Tech::Express => TechIcon::Devicon("devicon-express-original"),
            Tech::MongoDb => TechIcon::Devicon("devicon-mongodb-plain"),
            Tech::MySql => TechIcon::Devicon("devicon-mysql-original"),
            Tech::SocketIo => TechIcon::Devicon("devicon-socketio-original"),
            Tech::Redis => TechIcon::Devicon("devicon-redis-plain"),
            Tech::Jwt => TechIcon::Glyph(GlyphKind::Key),
            Tech::RestApi => TechIcon::Glyph(GlyphKind::Zap),
            Tech::Cloudinary => TechIcon::Glyph(GlyphKind::Cloud),
            Tech::Stripe => TechIcon::Glyph(GlyphKind::CreditCard),
            Tech::Cpp => TechIcon::Devicon("devicon-cplusplus-plain"),
            Tech::C => TechIcon::Devicon("devicon-c-plain"),
            Tech::Python => TechIcon::Devicon("devicon-python-plain"),
            Tech::Nltk => TechIcon::Devicon("devicon-python-plain"),
            Tech::Streamlit => TechIcon::Devicon("devicon-streamlit-plain"),
            Tech::DataStructures => TechIcon::Glyph(GlyphKind::Code),
            Tech::Algorithms => TechIcon::Glyph(GlyphKind::Terminal),
            Tech::Git => TechIcon::Devicon("devicon-git-plain"),
            Tech::GitHub => TechIcon::Devicon("devicon-github-original"),
            Tech::VsCode => TechIcon::Devicon("devicon-vscode-plain"),
            Tech::Postman => TechIcon::Devicon("devicon-postman-plain"),
            Tech::Vercel => TechIcon::Devicon("devicon-vercel-original"),
            Tech::Render => TechIcon::Glyph(GlyphKind::Server),
        }
    }

    /// Tailwind text color matching the brand color of the tag.
    pub fn color(self) -> &'static str {
        match self {
            Tech::React => "text-cyan-400",
            Tech::JavaScript => "text-yellow-400",
            Tech::Html => "text-orange-500",
            Tech::Css => "text-blue-500",
            Tech::Tailwind => "text-cyan-400",
            Tech::Bootstrap => "text-purple-600",
            Tech::MaterialUi => "text-blue-400",
            Tech::JQuery => "text-blue-600",
            Tech::FramerMotion => "text-pink-400",
            Tech::Vite => "text-purple-400",
            Tech::Node => "text-green-500",
            Tech::Express => "text-gray-400",
            Tech::MongoDb => "text-green-500",
            Tech::MySql => "text-blue-400",
            Tech::SocketIo => "text-white",
            Tech::Redis => "text-red-500",
            Tech::Jwt => "text-pink-400",
            Tech::RestApi => "text-cyan-400",
            Tech::Cloudinary => "text-blue-400",
            Tech::Stripe => "text-purple-500",
            Tech::Cpp => "text-blue-500",
            Tech::C => "text-blue-600",
            Tech::Python => "text-yellow-400",
            Tech::Nltk => "text-yellow-400",
            Tech::Streamlit => "text-red-400",
            Tech::DataStructures => "text-purple-400",
            Tech::Algorithms => "text-green-400",
            Tech::Git => "text-orange-500",
            Tech::GitHub => "text-white",
            Tech::VsCode => "text-blue-500",
            Tech::Postman => "text-orange-500",
            Tech::Vercel => "text-white",
            Tech::Render => "text-teal-400",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub label: &'static str,
    pub id: &'static str,
}

/// Document-order list of sections, shared by the navbar (active-section
/// tracking) and the footer quick links.
pub const SECTIONS: &[NavSection] = &[
    NavSection { label: "Home", id: "home" },
    NavSection { label: "About", id: "about" },
    NavSection { label: "Experience", id: "experience" },
    NavSection { label: "Skills", id: "skills" },
    NavSection { label: "Projects", id: "projects" },
    NavSection { label: "Education", id: "education" },
    NavSection { label: "Contact", id: "contact" },
];

pub const NAME: &str = "Divyansh Agrawal";
pub const EMAIL: &str = "divyansh1001agrawal@gmail.com";
pub const PHONE: &str = "+91 9301956873";
pub const LOCATION: &str = "Indore, Madhya Pradesh, India";
pub const RESUME_HREF: &str = "/Divyansh_Agrawal_Resume.pdf";
pub const PORTRAIT_SRC: &str = "/Profile.jpg";
pub const PORTRAIT_ALT_SRC: &str = "/Profile/ProfileImage-2.jpg";
pub const LOGO_SRC: &str = "/Logo.png";
pub const GITHUB_URL: &str = "https://github.com/MrDivyanshAgrawal";

pub const HERO_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "Competitive Programmer",
    "DSA Enthusiast",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: GlyphKind,
}

pub const HERO_SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/divyansh-agrawal-673420257",
        icon: GlyphKind::Linkedin,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/MrDivyanshAgrawal",
        icon: GlyphKind::Github,
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/divyansh.1004",
        icon: GlyphKind::Instagram,
    },
    SocialLink {
        label: "Email",
        href: "mailto:divyansh1001agrawal@gmail.com",
        icon: GlyphKind::Mail,
    },
];

/// Profile links shown in the About call-to-action row.
pub const PLATFORM_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/u/divyansh1004",
        icon: GlyphKind::Code,
    },
    SocialLink {
        label: "CodeChef",
        href: "https://www.codechef.com/users/divyansh_1001",
        icon: GlyphKind::Terminal,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/MrDivyanshAgrawal",
        icon: GlyphKind::Github,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub icon: GlyphKind,
    pub count: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        icon: GlyphKind::Code,
        count: "450+",
        label: "Problems Solved",
        description: "on LeetCode, CodeChef, and other platforms",
        gradient: "from-cyan-400 to-blue-500",
    },
    Stat {
        icon: GlyphKind::Monitor,
        count: "4+",
        label: "Major Projects",
        description: "including MERN stack applications",
        gradient: "from-purple-400 to-pink-500",
    },
    Stat {
        icon: GlyphKind::GraduationCap,
        count: "8.79",
        label: "CGPA",
        description: "at IIIT Kota (Till 6th Semester)",
        gradient: "from-green-400 to-emerald-500",
    },
    Stat {
        icon: GlyphKind::Award,
        count: "Top 10",
        label: "Hackathon Team",
        description: "in HacktheChain 2.0",
        gradient: "from-orange-400 to-red-500",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub achievements: &'static [(GlyphKind, &'static str)],
}

pub const EXPERIENCES: &[ExperienceEntry] = &[ExperienceEntry {
    title: "HacktheChain 2.0 - IIIT Kota",
    role: "Team Express Emergency Engineers",
    date: "Feb 2024",
    description: &[
        "Developed a web-based Emergency Response System that reduced response times by 25%, \
         and was recognized among the Top 10 of 40+ teams for innovation in crisis management.",
        "Optimized system architecture and workflows, enhancing performance by 30%, which \
         improved user navigation and efficiency of emergency handling.",
    ],
    skills: &[
        "Web Development",
        "System Architecture",
        "UX/UI Design",
        "Crisis Management",
    ],
    achievements: &[
        (GlyphKind::Award, "Top 10 out of 40+ teams"),
        (GlyphKind::TrendingUp, "25% faster response time"),
    ],
}];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub tech: Tech,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub gradient: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        gradient: "from-cyan-400 to-blue-500",
        skills: &[
            Skill { name: "React.js", tech: Tech::React },
            Skill { name: "JavaScript", tech: Tech::JavaScript },
            Skill { name: "HTML5", tech: Tech::Html },
            Skill { name: "CSS3", tech: Tech::Css },
            Skill { name: "Tailwind CSS", tech: Tech::Tailwind },
            Skill { name: "Bootstrap", tech: Tech::Bootstrap },
            Skill { name: "Material UI", tech: Tech::MaterialUi },
            Skill { name: "jQuery", tech: Tech::JQuery },
            Skill { name: "Framer Motion", tech: Tech::FramerMotion },
            Skill { name: "Vite", tech: Tech::Vite },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        gradient: "from-green-400 to-emerald-500",
        skills: &[
            Skill { name: "Node.js", tech: Tech::Node },
            Skill { name: "Express.js", tech: Tech::Express },
            Skill { name: "MongoDB", tech: Tech::MongoDb },
            Skill { name: "MySQL", tech: Tech::MySql },
            Skill { name: "Socket.IO", tech: Tech::SocketIo },
            Skill { name: "Redis", tech: Tech::Redis },
            Skill { name: "JWT", tech: Tech::Jwt },
            Skill { name: "RESTful APIs", tech: Tech::RestApi },
            Skill { name: "Cloudinary", tech: Tech::Cloudinary },
            Skill { name: "Stripe", tech: Tech::Stripe },
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        gradient: "from-purple-400 to-pink-500",
        skills: &[
            Skill { name: "C++", tech: Tech::Cpp },
            Skill { name: "C", tech: Tech::C },
            Skill { name: "Python", tech: Tech::Python },
            Skill { name: "JavaScript", tech: Tech::JavaScript },
            Skill { name: "Data Structures", tech: Tech::DataStructures },
            Skill { name: "Algorithms", tech: Tech::Algorithms },
        ],
    },
    SkillCategory {
        title: "Tools & Deployment",
        gradient: "from-orange-400 to-red-500",
        skills: &[
            Skill { name: "Git", tech: Tech::Git },
            Skill { name: "GitHub", tech: Tech::GitHub },
            Skill { name: "VS Code", tech: Tech::VsCode },
            Skill { name: "Postman", tech: Tech::Postman },
            Skill { name: "Vercel", tech: Tech::Vercel },
            Skill { name: "Render", tech: Tech::Render },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CpPlatform {
    pub platform: &'static str,
    pub rating: &'static str,
    pub problems: &'static str,
    pub standing: &'static str,
    pub gradient: &'static str,
    pub glow: &'static str,
    pub icon: GlyphKind,
    pub icon_color: &'static str,
    /// Percentage fill of the rating bar, 0..=100.
    pub progress: u32,
    pub link: &'static str,
}

pub const CP_PLATFORMS: &[CpPlatform] = &[
    CpPlatform {
        platform: "LeetCode",
        rating: "1830",
        problems: "450+",
        standing: "Top 6.47%",
        gradient: "from-yellow-400 to-orange-500",
        glow: "from-yellow-900/20 to-orange-900/20",
        icon: GlyphKind::Code,
        icon_color: "text-yellow-500",
        progress: 85,
        link: "https://leetcode.com/u/divyansh1004",
    },
    CpPlatform {
        platform: "CodeChef",
        rating: "1500",
        problems: "115+",
        standing: "3\u{2605} Coder",
        gradient: "from-amber-400 to-red-600",
        glow: "from-amber-900/20 to-red-900/20",
        icon: GlyphKind::Terminal,
        icon_color: "text-amber-600",
        progress: 70,
        link: "https://www.codechef.com/users/divyansh_1001",
    },
    CpPlatform {
        platform: "GeeksforGeeks",
        rating: "1570",
        problems: "200+",
        standing: "Institute Rank 1",
        gradient: "from-green-400 to-emerald-600",
        glow: "from-green-900/20 to-emerald-900/20",
        icon: GlyphKind::BarChart,
        icon_color: "text-green-600",
        progress: 75,
        link: "https://www.geeksforgeeks.org/user/divyansh10363k",
    },
    CpPlatform {
        platform: "Code360",
        rating: "2158",
        problems: "300+",
        standing: "Expert Level",
        gradient: "from-purple-400 to-pink-600",
        glow: "from-purple-900/20 to-pink-900/20",
        icon: GlyphKind::Target,
        icon_color: "text-purple-500",
        progress: 90,
        link: "https://www.naukri.com/code360/profile/divyansh1001ag",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub tech: &'static [Tech],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "EventHub - Book Your Next Experience",
        description: "A modern full-stack event booking platform with real-time seat selection, \
                      Stripe payment integration, and digital QR ticket generation. Features JWT \
                      authentication and WebSocket for live updates.",
        image: "/eventhub-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/EventHub",
        demo: Some("https://eventhub-t9i2.onrender.com"),
        tech: &[
            Tech::MongoDb,
            Tech::Express,
            Tech::React,
            Tech::Node,
            Tech::SocketIo,
            Tech::Stripe,
            Tech::Tailwind,
            Tech::Cloudinary,
        ],
    },
    Project {
        title: "MERN-CHAT",
        description: "A comprehensive real-time chat platform using MERN stack with Socket.IO \
                      for instant messaging, supporting secure authentication and profile \
                      management.",
        image: "/mern-chat-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/mern-chat",
        demo: Some("https://mern-chat-app.onrender.com"),
        tech: &[
            Tech::MongoDb,
            Tech::Express,
            Tech::React,
            Tech::Node,
            Tech::SocketIo,
            Tech::Jwt,
        ],
    },
    Project {
        title: "CartMantra",
        description: "Full-stack e-commerce platform with Stripe payment integration, admin \
                      dashboard, and comprehensive analytics for optimized performance.",
        image: "/cartmantra-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/cartmantra",
        demo: Some("https://cartmantra.onrender.com"),
        tech: &[
            Tech::React,
            Tech::Node,
            Tech::MongoDb,
            Tech::Stripe,
            Tech::Redis,
            Tech::Tailwind,
        ],
    },
    Project {
        title: "Text Similarity Recommender",
        description: "Python app using TF-IDF and cosine similarity to analyze and recommend \
                      related documents with interactive visualizations.",
        image: "/text-similarity-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/text-similarity",
        demo: Some("https://text-similarity.streamlit.app"),
        tech: &[Tech::Python, Tech::Nltk, Tech::Streamlit],
    },
    Project {
        title: "Currency Converter",
        description: "A responsive currency converter application with real-time exchange \
                      rates, built with React and Tailwind CSS. Features swap functionality and \
                      modern UI.",
        image: "/currency-converter-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/currency-converter",
        demo: None,
        tech: &[Tech::React, Tech::Tailwind, Tech::RestApi, Tech::Vite],
    },
    Project {
        title: "Emergency Response System",
        description: "Web-based system that reduced emergency response times by 25%, recognized \
                      among Top 10 teams in HacktheChain 2.0 hackathon.",
        image: "/emergency-response-preview.png",
        github: "https://github.com/MrDivyanshAgrawal/emergency-response",
        demo: None,
        tech: &[Tech::React, Tech::Node, Tech::MongoDb, Tech::SocketIo],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub grade_label: &'static str,
    pub grade_value: &'static str,
    pub grade_gradient: &'static str,
    pub icon: GlyphKind,
    pub accent_border: &'static str,
    pub logo: &'static str,
    pub highlights: &'static [&'static str],
    pub coursework: &'static [&'static str],
    pub subjects: &'static [&'static str],
    pub awards: &'static [&'static str],
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "Indian Institute of Information Technology, Kota",
        degree: "Bachelor of Technology in Computer Science",
        duration: "Nov 2022 - Present",
        grade_label: "CGPA",
        grade_value: "8.79 (Till 6th Semester)",
        grade_gradient: "from-cyan-400 to-blue-400",
        icon: GlyphKind::GraduationCap,
        accent_border: "border-cyan-400 shadow-cyan-400/20",
        logo: "/Education/College",
        highlights: &[
            "Strong foundation in Computer Science",
            "Active participant in coding competitions",
        ],
        coursework: &[
            "Data Structures",
            "Artificial Intelligence",
            "Database Management",
            "Operating Systems",
            "Computer Networks",
            "Object-Oriented Programming",
        ],
        subjects: &[],
        awards: &[],
    },
    EducationEntry {
        institution: "Chhatrapati Shivaji Public School",
        degree: "Senior Secondary (Class XII) - Science Stream",
        duration: "2019 - 2021",
        grade_label: "Percentage",
        grade_value: "85.2%",
        grade_gradient: "from-blue-400 to-purple-400",
        icon: GlyphKind::Book,
        accent_border: "border-blue-400 shadow-blue-400/20",
        logo: "/Education/School2",
        highlights: &[
            "PCM with Physical Education",
            "Consistent academic performance",
        ],
        coursework: &[],
        subjects: &[
            "Physics",
            "Chemistry",
            "Mathematics",
            "Physical Education",
            "English",
        ],
        awards: &[],
    },
    EducationEntry {
        institution: "St. Norbert Senior Secondary School",
        degree: "Secondary (Class X) - CBSE",
        duration: "2009 - 2019",
        grade_label: "Percentage",
        grade_value: "91%",
        grade_gradient: "from-green-400 to-emerald-400",
        icon: GlyphKind::School,
        accent_border: "border-green-400 shadow-green-400/20",
        logo: "/Education/School1",
        highlights: &[
            "10 Years of Academic Excellence",
            "Strong foundation in academics",
        ],
        coursework: &[],
        subjects: &[],
        awards: &[
            "Bronze Medal - National Science Olympiad",
            "Bronze Medal - French Olympiad",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "LeetCode Achievements",
        description: "Earned 7 LeetCode badges including the prestigious 100 Days Badge, \
                      50 Days Badge, and Contest badges",
        highlight: "7 Badges",
    },
    Achievement {
        title: "Google Cloud Arcade",
        description: "Achieved 70+ badges and secured position in the elite Diamond League \
                      through consistent performance",
        highlight: "Diamond League",
    },
    Achievement {
        title: "Naukri Campus Recognition",
        description: "Acquired 25 badges for comprehensive skill development across various \
                      technical domains",
        highlight: "25 Badges",
    },
    Achievement {
        title: "Science & Language Olympiads",
        description: "Won Bronze Medals in both National Science Olympiad and French Olympiad",
        highlight: "2 Bronze Medals",
    },
    Achievement {
        title: "Academic Excellence",
        description: "Consistent academic performer with 91% in Class X and maintaining 8.79 \
                      CGPA in college",
        highlight: "Top Performer",
    },
];

/// Color tone of a contact info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Blue,
    Purple,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Cyan => "bg-cyan-400/10 text-cyan-400",
            Tone::Blue => "bg-blue-400/10 text-blue-400",
            Tone::Purple => "bg-purple-400/10 text-purple-400",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactCard {
    pub icon: GlyphKind,
    pub title: &'static str,
    pub content: &'static str,
    pub href: Option<&'static str>,
    pub tone: Tone,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        icon: GlyphKind::MapPin,
        title: "Location",
        content: LOCATION,
        href: None,
        tone: Tone::Cyan,
    },
    ContactCard {
        icon: GlyphKind::Mail,
        title: "Email",
        content: EMAIL,
        href: Some("mailto:divyansh1001agrawal@gmail.com"),
        tone: Tone::Blue,
    },
    ContactCard {
        icon: GlyphKind::Phone,
        title: "Phone",
        content: PHONE,
        href: Some("tel:+919301956873"),
        tone: Tone::Purple,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactSocial {
    pub name: &'static str,
    pub icon: GlyphKind,
    pub href: &'static str,
    pub hover: &'static str,
}

pub const CONTACT_SOCIALS: &[ContactSocial] = &[
    ContactSocial {
        name: "GitHub",
        icon: GlyphKind::Github,
        href: "https://github.com/MrDivyanshAgrawal",
        hover: "hover:bg-gray-700",
    },
    ContactSocial {
        name: "LinkedIn",
        icon: GlyphKind::Linkedin,
        href: "https://linkedin.com/in/DivyanshAgrawal",
        hover: "hover:bg-blue-700",
    },
    ContactSocial {
        name: "Twitter",
        icon: GlyphKind::ExternalLink,
        href: "https://twitter.com/yourusername",
        hover: "hover:bg-sky-600",
    },
    ContactSocial {
        name: "Instagram",
        icon: GlyphKind::Instagram,
        href: "https://instagram.com/yourusername",
        hover: "hover:bg-pink-600",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_mapping_is_total() {
        // Every tag renders with a label and a concrete icon.
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(!skill.tech.label().is_empty());
                match skill.tech.icon() {
                    TechIcon::Devicon(class) => assert!(class.starts_with("devicon-")),
                    TechIcon::Glyph(_) => {}
                }
                assert!(skill.tech.color().starts_with("text-"));
            }
        }
        for project in PROJECTS {
            for tech in project.tech {
                assert!(!tech.label().is_empty());
            }
        }
    }

    #[test]
    fn sections_are_unique_and_ordered() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids.first(), Some(&"home"));
        assert_eq!(ids.last(), Some(&"contact"));
    }

    #[test]
    fn education_variants_carry_their_own_lists() {
        assert!(!EDUCATION[0].coursework.is_empty());
        assert!(!EDUCATION[1].subjects.is_empty());
        assert!(!EDUCATION[2].awards.is_empty());
    }

    #[test]
    fn cp_progress_stays_in_range() {
        for platform in CP_PLATFORMS {
            assert!(platform.progress <= 100);
        }
    }
}
