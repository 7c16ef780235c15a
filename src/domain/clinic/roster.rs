//! The pilgrim roster shown on the landing view.

use serde::Serialize;

/// One of the four pilgrims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    /// Accent colour as a CSS hex string.
    pub color: &'static str,
}

pub const CHARACTERS: [Character; 4] = [
    Character {
        name: "唐三藏",
        role: "师傅",
        avatar: "https://bkimg.cdn.bcebos.com/pic/a08b87d6277f9e2f070868f0f37bb324b8997380f745",
        color: "#eab308",
    },
    Character {
        name: "孙悟空",
        role: "大师兄",
        avatar: "https://bkimg.cdn.bcebos.com/pic/023b5bb5c9ea15ce111867bab2003af33a87b244f77c",
        color: "#ef4444",
    },
    Character {
        name: "猪八戒",
        role: "二师兄",
        avatar: "https://bkimg.cdn.bcebos.com/pic/83025aafa40f4bfb1bbd1349f8076e0392452097f745",
        color: "#f472b6",
    },
    Character {
        name: "沙悟净",
        role: "三师弟",
        avatar: "https://bkimg.cdn.bcebos.com/pic/838ba61ea8d3fd1f269389f43a4e251f95ca5f96f745",
        color: "#3b82f6",
    },
];
