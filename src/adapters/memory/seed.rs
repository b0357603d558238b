//! Fixed sample catalog loaded at startup.

use crate::domain::catalog::{Course, Instructor, Package, DEFAULT_RATING};
use crate::domain::foundation::{EntityId, Timestamp};

fn course(id: &'static str, title: &str, description: &str, category: &str, at: Timestamp) -> Course {
    Course {
        id: EntityId::from_static(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        thumbnail: None,
        lessons: 0,
        rating: DEFAULT_RATING.to_string(),
        category: category.to_string(),
        instructor_id: None,
        created_at: at,
    }
}

/// The twelve sample courses, ids "1" through "12".
pub fn courses(at: Timestamp) -> Vec<Course> {
    vec![
        course("1", "Intro to Web Development", "Learn the basics of HTML, CSS, and JS.", "Development", at),
        course("2", "Digital Marketing 101", "Master the basics of online marketing.", "Marketing", at),
        course("3", "Finance Fundamentals", "Understand the core principles of finance.", "Finance", at),
        course("4", "React for Beginners", "Learn React.js with real-world examples.", "Development", at),
        course("5", "Stock Market Basics", "Get started with investing and trading.", "Finance", at),
        course("6", "YouTube Growth Mastery", "Grow your channel with proven techniques.", "Creative", at),
        course("7", "Instagram Reels Masterclass", "Create viral Reels and build your brand.", "Creative", at),
        course("8", "Machine Learning A-Z", "Beginner to expert in ML and AI.", "Technology", at),
        course("9", "Python Programming Bootcamp", "Complete Python course from beginner to advanced.", "Development", at),
        course("10", "Data Science Masterclass", "Learn data analysis, visualization, and machine learning.", "Technology", at),
        course("11", "UI/UX Design Fundamentals", "Master user interface and user experience design.", "Design", at),
        course("12", "Business Strategy & Planning", "Learn strategic thinking and business planning.", "Business", at),
    ]
}

struct PackageSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    original_price: &'static str,
    discounted_price: &'static str,
    category: &'static str,
    rating: &'static str,
    features: &'static [&'static str],
    course_ids: &'static [&'static str],
}

impl PackageSeed {
    fn build(&self, at: Timestamp) -> Package {
        Package {
            id: EntityId::from_static(self.id),
            title: self.title.to_string(),
            description: Some(self.description.to_string()),
            image: Some(self.image.to_string()),
            original_price: Some(self.original_price.to_string()),
            discounted_price: Some(self.discounted_price.to_string()),
            category: self.category.to_string(),
            rating: self.rating.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            course_ids: self.course_ids.iter().map(|id| EntityId::from_static(id)).collect(),
            created_at: at,
        }
    }
}

const PACKAGES: &[PackageSeed] = &[
    PackageSeed {
        id: "1",
        title: "Grow Wave",
        description: "Perfect for beginners looking to start their learning journey with essential skills and foundational knowledge.",
        image: "https://images.unsplash.com/photo-1553484771-371a605b060b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        original_price: "2999",
        discounted_price: "1999",
        category: "Beginner",
        rating: "4.7",
        features: &[
            "5 Comprehensive Courses",
            "Lifetime Access",
            "Certificate of Completion",
            "Community Support",
            "Mobile & Desktop Access",
        ],
        course_ids: &["1", "2", "3", "4", "5"],
    },
    PackageSeed {
        id: "2",
        title: "Expert Wave",
        description: "Advanced package for professionals seeking to master cutting-edge technologies and industry best practices.",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        original_price: "4999",
        discounted_price: "3499",
        category: "Advanced",
        rating: "4.9",
        features: &[
            "8 Expert-Level Courses",
            "1-on-1 Mentorship",
            "Industry Projects",
            "Job Placement Support",
            "Premium Resources",
        ],
        course_ids: &["4", "8", "9", "10", "11", "12", "1", "2"],
    },
    PackageSeed {
        id: "3",
        title: "Finance Wave",
        description: "Comprehensive financial education package covering investment, trading, and wealth management strategies.",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        original_price: "3999",
        discounted_price: "2799",
        category: "Finance",
        rating: "4.8",
        features: &[
            "6 Finance Courses",
            "Stock Market Simulator",
            "Investment Tools",
            "Financial Planning Templates",
            "Expert Webinars",
        ],
        course_ids: &["3", "5", "12"],
    },
    PackageSeed {
        id: "4",
        title: "Creator Wave",
        description: "Perfect for content creators and digital marketers looking to build their online presence and monetize their skills.",
        image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        original_price: "3499",
        discounted_price: "2299",
        category: "Creative",
        rating: "4.6",
        features: &[
            "7 Creative Courses",
            "Content Creation Tools",
            "Brand Building Guide",
            "Monetization Strategies",
            "Creator Community Access",
        ],
        course_ids: &["2", "6", "7", "11"],
    },
    PackageSeed {
        id: "5",
        title: "Tech Wave",
        description: "Complete technology package for aspiring developers and tech professionals with hands-on projects and real-world applications.",
        image: "https://images.unsplash.com/photo-1573164713988-8665fc963095?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        original_price: "5999",
        discounted_price: "3999",
        category: "Technology",
        rating: "4.9",
        features: &[
            "10 Technology Courses",
            "Hands-on Projects",
            "Code Review Sessions",
            "Industry Mentorship",
            "Job Interview Prep",
            "GitHub Portfolio Setup",
        ],
        course_ids: &["1", "4", "8", "9", "10", "11"],
    },
];

/// The five sample packages.
pub fn packages(at: Timestamp) -> Vec<Package> {
    PACKAGES.iter().map(|p| p.build(at)).collect()
}

fn instructor(
    id: &'static str,
    name: &str,
    title: &str,
    bio: &str,
    avatar: &str,
    rating: &str,
    expertise: &[&str],
    at: Timestamp,
) -> Instructor {
    Instructor {
        id: EntityId::from_static(id),
        name: name.to_string(),
        title: title.to_string(),
        bio: Some(bio.to_string()),
        avatar: Some(avatar.to_string()),
        rating: rating.to_string(),
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
        created_at: at,
    }
}

/// The eight sample instructors.
pub fn instructors(at: Timestamp) -> Vec<Instructor> {
    vec![
        instructor(
            "1",
            "Dr. Sarah Johnson",
            "Senior Software Engineer at Google",
            "With over 10 years of experience in software development, Dr. Johnson specializes in full-stack development and machine learning.",
            "https://images.unsplash.com/photo-1494790108755-2616b5b8b30b?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.9",
            &["JavaScript", "Python", "Machine Learning", "React"],
            at,
        ),
        instructor(
            "2",
            "Michael Chen",
            "Digital Marketing Director",
            "Michael has helped over 500 businesses grow their online presence through strategic digital marketing campaigns.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.8",
            &["Digital Marketing", "SEO", "Social Media", "Content Strategy"],
            at,
        ),
        instructor(
            "3",
            "Emily Rodriguez",
            "Financial Advisor & Investment Strategist",
            "Emily is a certified financial planner with expertise in investment strategies and wealth management for individuals and businesses.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.7",
            &["Investment Planning", "Financial Analysis", "Risk Management", "Portfolio Management"],
            at,
        ),
        instructor(
            "4",
            "David Kim",
            "UX/UI Design Lead at Adobe",
            "David is a creative professional with 8+ years of experience in user experience design and interface development.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.9",
            &["UI/UX Design", "Figma", "Adobe Creative Suite", "User Research"],
            at,
        ),
        instructor(
            "5",
            "Lisa Thompson",
            "Data Science Manager at Microsoft",
            "Lisa leads data science teams and has extensive experience in machine learning, data analysis, and business intelligence.",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.8",
            &["Data Science", "Machine Learning", "Python", "SQL", "Business Intelligence"],
            at,
        ),
        instructor(
            "6",
            "James Wilson",
            "Business Strategy Consultant",
            "James has consulted for Fortune 500 companies on business strategy, operations, and digital transformation initiatives.",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.7",
            &["Business Strategy", "Operations", "Leadership", "Digital Transformation"],
            at,
        ),
        instructor(
            "7",
            "Anna Petrov",
            "Content Creator & YouTuber",
            "Anna has built a successful YouTube channel with over 1M subscribers and helps others create engaging content and grow their audience.",
            "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.6",
            &["Content Creation", "YouTube Growth", "Video Editing", "Social Media Marketing"],
            at,
        ),
        instructor(
            "8",
            "Robert Garcia",
            "Full Stack Developer & Tech Lead",
            "Robert is a seasoned developer with expertise in modern web technologies and has led development teams at several tech startups.",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300",
            "4.9",
            &["Full Stack Development", "Node.js", "React", "DevOps", "Team Leadership"],
            at,
        ),
    ]
}
