//! Embedded portal data.
//!
//! Seeds are authored once with `Localized` text and materialized into
//! plain records per locale.

use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::gallery::GalleryImage;
use crate::models::locale::{Locale, Localized};
use crate::models::staff::{Staff, University};

struct EventSeed {
    id: i64,
    title: Localized,
    date: &'static str,
    time: &'static str,
    location: Localized,
    category: Category,
    description: Localized,
    image: &'static str,
    capacity: Option<u32>,
    registered: Option<u32>,
    registration_deadline: Option<&'static str>,
}

const EVENTS: &[EventSeed] = &[
    EventSeed {
        id: 1,
        title: Localized::new("TechFest 2025", "TechFest 2025"),
        date: "2025-07-20",
        time: "10:00 - 16:00",
        location: Localized::new("Main conference hall", "Phòng hội thảo chính"),
        category: Category::Academic,
        description: Localized::new(
            "Annual technology exhibition with innovative student projects and workshops led by industry experts.",
            "Triển lãm công nghệ thường niên với các dự án sáng tạo từ sinh viên và workshop từ các chuyên gia trong ngành.",
        ),
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800",
        capacity: Some(500),
        registered: Some(287),
        registration_deadline: Some("2025-07-15"),
    },
    EventSeed {
        id: 2,
        title: Localized::new("Culture Week", "Tuần lễ Văn hóa"),
        date: "2025-08-05",
        time: "09:00 - 18:00",
        location: Localized::new("University stadium", "Sân vận động trường"),
        category: Category::Cultural,
        description: Localized::new(
            "A diverse cultural festival of performances, food stalls and traditional exhibitions.",
            "Lễ hội văn hóa đa dạng với các hoạt động biểu diễn, ẩm thực và trưng bày truyền thống.",
        ),
        image: "https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3?w=800",
        capacity: Some(1000),
        registered: Some(642),
        registration_deadline: Some("2025-07-30"),
    },
    EventSeed {
        id: 3,
        title: Localized::new("Hackathon 2025", "Hackathon 2025"),
        date: "2025-07-15",
        time: "08:00 - 20:00",
        location: Localized::new("Lab room 302", "Phòng lab 302"),
        category: Category::Academic,
        description: Localized::new(
            "A 48-hour programming contest with attractive prizes and internship opportunities at tech companies.",
            "Cuộc thi lập trình 48 giờ với giải thưởng hấp dẫn và cơ hội thực tập tại các công ty công nghệ.",
        ),
        image: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=800",
        capacity: Some(200),
        registered: Some(156),
        registration_deadline: Some("2025-07-10"),
    },
    EventSeed {
        id: 4,
        title: Localized::new("Inter-faculty Football Tournament", "Giải bóng đá liên khoa"),
        date: "2025-09-10",
        time: "15:00 - 17:00",
        location: Localized::new("University football field", "Sân bóng đá trường"),
        category: Category::Sports,
        description: Localized::new(
            "The annual tournament between faculties, played in high spirits with plenty of supporter activities.",
            "Giải đấu thường niên giữa các khoa với tinh thần thể thao cao và nhiều hoạt động cổ vũ.",
        ),
        image: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800",
        capacity: Some(320),
        registered: Some(128),
        registration_deadline: Some("2025-09-05"),
    },
    EventSeed {
        id: 5,
        title: Localized::new("AI Conference 2024", "Hội thảo AI 2024"),
        date: "2024-12-15",
        time: "14:00 - 17:00",
        location: Localized::new("Hall A", "Hội trường A"),
        category: Category::Academic,
        description: Localized::new(
            "A conference on artificial intelligence joined by leading experts.",
            "Hội thảo về trí tuệ nhân tạo với sự tham gia của các chuyên gia hàng đầu.",
        ),
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800",
        capacity: None,
        registered: None,
        registration_deadline: None,
    },
    EventSeed {
        id: 6,
        title: Localized::new("Acoustic Night", "Đêm nhạc acoustic"),
        date: "2024-11-20",
        time: "19:00 - 22:00",
        location: Localized::new("Student café", "Café sinh viên"),
        category: Category::Cultural,
        description: Localized::new(
            "An evening of music performed by student bands in a cosy space.",
            "Đêm nhạc với sự biểu diễn của các ban nhạc sinh viên trong không gian ấm cúng.",
        ),
        image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800",
        capacity: None,
        registered: None,
        registration_deadline: None,
    },
];

pub(super) fn events(locale: Locale) -> Vec<Event> {
    EVENTS
        .iter()
        .map(|seed| Event {
            id: seed.id,
            title: seed.title.get(locale).to_string(),
            date: seed.date.to_string(),
            time: seed.time.to_string(),
            location: seed.location.get(locale).to_string(),
            category: seed.category,
            description: seed.description.get(locale).to_string(),
            image: seed.image.to_string(),
            capacity: seed.capacity,
            registered: seed.registered,
            registration_deadline: seed.registration_deadline.map(str::to_string),
        })
        .collect()
}

struct StaffSeed {
    id: i64,
    name: &'static str,
    title: Localized,
    department: Localized,
    phone: &'static str,
    email: &'static str,
}

const STAFF: &[StaffSeed] = &[
    StaffSeed {
        id: 1,
        name: "Assoc. Prof. Dr. Nguyen Van An",
        title: Localized::new("Director of Student Affairs", "Trưởng phòng Công tác sinh viên"),
        department: Localized::new("Student Affairs Office", "Phòng Công tác sinh viên"),
        phone: "0123 456 789",
        email: "nguyen.van.an@university.edu.vn",
    },
    StaffSeed {
        id: 2,
        name: "M.A. Tran Thi Binh",
        title: Localized::new("Cultural Activities Coordinator", "Điều phối viên hoạt động văn hóa"),
        department: Localized::new("Faculty of Engineering", "Khoa Kỹ thuật"),
        phone: "0123 456 790",
        email: "tran.thi.binh@university.edu.vn",
    },
    StaffSeed {
        id: 3,
        name: "Dr. Le Minh Cuong",
        title: Localized::new("Academic Events Coordinator", "Điều phối viên sự kiện học thuật"),
        department: Localized::new(
            "Faculty of Information Technology",
            "Khoa Công nghệ thông tin",
        ),
        phone: "0123 456 791",
        email: "le.minh.cuong@university.edu.vn",
    },
    StaffSeed {
        id: 4,
        name: "M.A. Pham Thi Dung",
        title: Localized::new("Sports Activities Manager", "Quản lý hoạt động thể thao"),
        department: Localized::new("Physical Education Department", "Bộ môn Giáo dục thể chất"),
        phone: "0123 456 792",
        email: "pham.thi.dung@university.edu.vn",
    },
    StaffSeed {
        id: 5,
        name: "Nguyen Thanh Hai",
        title: Localized::new("Student Coordinator", "Điều phối viên sinh viên"),
        department: Localized::new("Student Union", "Đoàn Thanh niên"),
        phone: "0123 456 793",
        email: "nguyen.thanh.hai@university.edu.vn",
    },
];

pub(super) fn staff(locale: Locale) -> Vec<Staff> {
    STAFF
        .iter()
        .map(|seed| Staff {
            id: seed.id,
            name: seed.name.to_string(),
            title: seed.title.get(locale).to_string(),
            department: seed.department.get(locale).to_string(),
            phone: seed.phone.to_string(),
            email: seed.email.to_string(),
        })
        .collect()
}

pub(super) fn university(locale: Locale) -> University {
    University {
        name: Localized::new("ABC Technical University", "Trường Đại học Kỹ thuật ABC").get(locale).to_string(),
        address: Localized::new(
            "123 University Street, Cau Giay District, Hanoi",
            "123 Đường Đại học, Quận Cầu Giấy, Hà Nội",
        )
        .get(locale)
        .to_string(),
        phone: "024 1234 5678".to_string(),
        email: "info@university.edu.vn".to_string(),
        website: "www.university.edu.vn".to_string(),
    }
}

struct GallerySeed {
    id: i64,
    title: Localized,
    year: &'static str,
    category: Category,
    url: &'static str,
    description: Localized,
}

const GALLERY: &[GallerySeed] = &[
    GallerySeed {
        id: 1,
        title: Localized::new("TechFest 2024", "TechFest 2024"),
        year: "2023-24",
        category: Category::Academic,
        url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800",
        description: Localized::new(
            "Technology exhibition with many innovative projects",
            "Triển lãm công nghệ với nhiều dự án sáng tạo",
        ),
    },
    GallerySeed {
        id: 2,
        title: Localized::new("Opening Ceremony 2024", "Lễ khai giảng 2024"),
        year: "2023-24",
        category: Category::Cultural,
        url: "https://images.unsplash.com/photo-1523580494863-6f3031224c94?w=800",
        description: Localized::new(
            "New academic year opening ceremony",
            "Lễ khai giảng năm học mới",
        ),
    },
    GallerySeed {
        id: 3,
        title: Localized::new("Football Tournament 2024", "Giải bóng đá 2024"),
        year: "2023-24",
        category: Category::Sports,
        url: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800",
        description: Localized::new(
            "Inter-faculty football tournament final",
            "Trận chung kết giải bóng đá liên khoa",
        ),
    },
    GallerySeed {
        id: 4,
        title: Localized::new("AI Workshop", "Workshop AI"),
        year: "2024-25",
        category: Category::Academic,
        url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800",
        description: Localized::new(
            "Hands-on artificial intelligence workshop",
            "Workshop thực hành trí tuệ nhân tạo",
        ),
    },
    GallerySeed {
        id: 5,
        title: Localized::new("Spring Concert", "Hòa nhạc mùa xuân"),
        year: "2024-25",
        category: Category::Cultural,
        url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800",
        description: Localized::new(
            "Student bands performing on the spring stage",
            "Các ban nhạc sinh viên biểu diễn trên sân khấu mùa xuân",
        ),
    },
    GallerySeed {
        id: 6,
        title: Localized::new("Marathon 2024", "Marathon 2024"),
        year: "2023-24",
        category: Category::Sports,
        url: "https://images.unsplash.com/photo-1452626038306-9aae5e071dd3?w=800",
        description: Localized::new(
            "Annual charity marathon around the campus",
            "Giải marathon từ thiện thường niên quanh khuôn viên trường",
        ),
    },
    GallerySeed {
        id: 7,
        title: Localized::new("Career Day", "Ngày hội việc làm"),
        year: "2024-25",
        category: Category::Academic,
        url: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=800",
        description: Localized::new(
            "Employers and students meeting at the annual career fair",
            "Doanh nghiệp và sinh viên gặp gỡ tại ngày hội việc làm thường niên",
        ),
    },
    GallerySeed {
        id: 8,
        title: Localized::new("Mid-autumn Festival", "Lễ hội Trung thu"),
        year: "2024-25",
        category: Category::Cultural,
        url: "https://images.unsplash.com/photo-1508690207469-1e05e99ee3e9?w=800",
        description: Localized::new(
            "Lantern parade and traditional games on campus",
            "Rước đèn và trò chơi dân gian trong khuôn viên trường",
        ),
    },
];

pub(super) fn gallery(locale: Locale) -> Vec<GalleryImage> {
    GALLERY
        .iter()
        .map(|seed| GalleryImage {
            id: seed.id,
            title: seed.title.get(locale).to_string(),
            year: seed.year.to_string(),
            category: seed.category,
            url: seed.url.to_string(),
            description: seed.description.get(locale).to_string(),
        })
        .collect()
}
