use serde::{Deserialize, Serialize};

/// Basic facts the user enters on the first form screen.
/// Age stays free text; the form widget is the only thing constraining it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub interest: String,
}

impl UserProfile {
    /// True when name, age and interest are all non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.age.is_empty() && !self.interest.is_empty()
    }
}

/// The five fixed aptitude questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKey {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 5] = [
        QuestionKey::Q1,
        QuestionKey::Q2,
        QuestionKey::Q3,
        QuestionKey::Q4,
        QuestionKey::Q5,
    ];

    /// English topic name, used when describing the answer to the model.
    pub fn topic(self) -> &'static str {
        match self {
            QuestionKey::Q1 => "Problem Solving",
            QuestionKey::Q2 => "Teamwork",
            QuestionKey::Q3 => "Learning Style",
            QuestionKey::Q4 => "Preferred Environment",
            QuestionKey::Q5 => "Ultimate Goal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionKey::Q1 => "เมื่อเจอปัญหาคุณมักจะ...",
            QuestionKey::Q2 => "บทบาทของคุณในงานกลุ่มคือ?",
            QuestionKey::Q3 => "คุณชอบเรียนรู้สิ่งใหม่ด้วยวิธีไหน?",
            QuestionKey::Q4 => "สภาพแวดล้อมการทำงานในฝัน?",
            QuestionKey::Q5 => "เป้าหมายสูงสุดในชีวิตการทำงาน?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            QuestionKey::Q1 => "เช่น วิเคราะห์สาเหตุทีละจุด, ปรึกษาเพื่อน",
            QuestionKey::Q2 => "เช่น เป็นผู้นำ, เป็นคนเก็บข้อมูล",
            QuestionKey::Q3 => "เช่น ลงมือทำจริง, ดูวิดีโอ",
            QuestionKey::Q4 => "เช่น เงียบสงบ, ออฟฟิศที่สนุกสนาน",
            QuestionKey::Q5 => "เช่น สร้างการเปลี่ยนแปลงสังคม, รวย",
        }
    }
}

/// A question as presented on the second form screen.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub key: QuestionKey,
    pub topic: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// The question catalog, in display order.
pub fn question_catalog() -> Vec<Question> {
    QuestionKey::ALL
        .iter()
        .map(|&key| Question {
            key,
            topic: key.topic(),
            label: key.label(),
            placeholder: key.placeholder(),
        })
        .collect()
}

/// Free-text answers to q1..q5.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeAnswers {
    #[serde(default)]
    pub q1: String,
    #[serde(default)]
    pub q2: String,
    #[serde(default)]
    pub q3: String,
    #[serde(default)]
    pub q4: String,
    #[serde(default)]
    pub q5: String,
}

impl AptitudeAnswers {
    pub fn get(&self, key: QuestionKey) -> &str {
        match key {
            QuestionKey::Q1 => &self.q1,
            QuestionKey::Q2 => &self.q2,
            QuestionKey::Q3 => &self.q3,
            QuestionKey::Q4 => &self.q4,
            QuestionKey::Q5 => &self.q5,
        }
    }

    /// True when all five answers are non-empty.
    pub fn is_complete(&self) -> bool {
        QuestionKey::ALL.iter().all(|&k| !self.get(k).is_empty())
    }
}
