//! Multiple-choice question generation.
//!
//! Topics from the keyword table have a canned question bank which is returned
//! as-is regardless of difficulty. Any other topic gets a single question
//! built from a difficulty-specific template, whose answer is always the
//! first option.

use serde::Serialize;

use super::classifier::Difficulty;

/// A multiple-choice question with exactly four options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mcq {
    #[serde(rename = "q")]
    pub prompt: String,
    pub options: [String; 4],
    pub answer: String,
}

impl Mcq {
    /// Whether the answer is one of the options
    pub fn is_consistent(&self) -> bool {
        self.options.contains(&self.answer)
    }
}

/// Bank entry; `answer` indexes into `options`
struct CannedMcq {
    prompt: &'static str,
    options: [&'static str; 4],
    answer: usize,
}

impl CannedMcq {
    fn to_mcq(&self) -> Mcq {
        Mcq {
            prompt: self.prompt.to_string(),
            options: self.options.map(str::to_string),
            answer: self.options[self.answer].to_string(),
        }
    }
}

const MCQ_BANK: &[(&str, &[CannedMcq])] = &[
    (
        "Deadlock",
        &[
            CannedMcq {
                prompt: "Which of the following is NOT a necessary condition for deadlock?",
                options: ["Mutual exclusion", "Hold and wait", "Preemption", "Circular wait"],
                answer: 2,
            },
            CannedMcq {
                prompt: "The Banker's algorithm is used for deadlock:",
                options: ["Prevention", "Avoidance", "Detection", "Recovery"],
                answer: 1,
            },
        ],
    ),
    (
        "Process Management",
        &[
            CannedMcq {
                prompt: "Which data structure stores the state of a process?",
                options: [
                    "Process Control Block",
                    "Page table",
                    "Inode",
                    "File descriptor table",
                ],
                answer: 0,
            },
            CannedMcq {
                prompt: "Threads of the same process share:",
                options: ["Stack", "Registers", "Address space", "Program counter"],
                answer: 2,
            },
        ],
    ),
    (
        "CPU Scheduling",
        &[
            CannedMcq {
                prompt: "Which scheduling algorithm can cause starvation of long jobs?",
                options: ["FCFS", "Round Robin", "Shortest Job First", "FIFO"],
                answer: 2,
            },
            CannedMcq {
                prompt: "Round Robin scheduling is primarily designed for:",
                options: [
                    "Batch systems",
                    "Time-sharing systems",
                    "Real-time systems",
                    "Single-user systems",
                ],
                answer: 1,
            },
        ],
    ),
    (
        "Memory Management",
        &[
            CannedMcq {
                prompt: "Paging eliminates which kind of fragmentation?",
                options: [
                    "Internal fragmentation",
                    "External fragmentation",
                    "Both",
                    "Neither",
                ],
                answer: 1,
            },
            CannedMcq {
                prompt: "The TLB is used to speed up:",
                options: [
                    "Disk access",
                    "Address translation",
                    "Process creation",
                    "Context switching",
                ],
                answer: 1,
            },
        ],
    ),
    (
        "Synchronization",
        &[
            CannedMcq {
                prompt: "A binary semaphore can take which values?",
                options: ["0 and 1", "Any integer", "Only positive values", "-1 and 1"],
                answer: 0,
            },
            CannedMcq {
                prompt: "Which requirement ensures only one process is in its critical section?",
                options: [
                    "Progress",
                    "Bounded waiting",
                    "Mutual exclusion",
                    "Fairness",
                ],
                answer: 2,
            },
        ],
    ),
];

/// Template with `{topic}` placeholders; the first option is the answer
struct McqTemplate {
    prompt: &'static str,
    options: [&'static str; 4],
}

impl McqTemplate {
    fn render(&self, topic: &str) -> Mcq {
        let options = self.options.map(|opt| opt.replace("{topic}", topic));
        let answer = options[0].clone();
        Mcq {
            prompt: self.prompt.replace("{topic}", topic),
            options,
            answer,
        }
    }
}

static EASY_TEMPLATE: McqTemplate = McqTemplate {
    prompt: "Which of the following best defines {topic}?",
    options: [
        "A core concept describing {topic}",
        "An unrelated hardware component",
        "A programming language keyword",
        "A network communication protocol",
    ],
};

static MEDIUM_TEMPLATE: McqTemplate = McqTemplate {
    prompt: "Which statement best explains the role of {topic}?",
    options: [
        "It explains how {topic} works within the system",
        "It only applies to user interface design",
        "It has no effect on system behaviour",
        "It is used exclusively for data storage",
    ],
};

static HARD_TEMPLATE: McqTemplate = McqTemplate {
    prompt: "Which analysis of {topic} is most accurate?",
    options: [
        "{topic} involves trade-offs that must be evaluated in context",
        "{topic} always improves performance without cost",
        "{topic} cannot be compared with alternative approaches",
        "{topic} is irrelevant to system design decisions",
    ],
};

fn template_for(difficulty: Difficulty) -> &'static McqTemplate {
    match difficulty {
        Difficulty::Easy => &EASY_TEMPLATE,
        Difficulty::Medium => &MEDIUM_TEMPLATE,
        Difficulty::Hard => &HARD_TEMPLATE,
    }
}

/// Canned questions for a bank topic, if any
pub fn bank_mcqs(topic: &str) -> Option<Vec<Mcq>> {
    MCQ_BANK
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, entries)| entries.iter().map(CannedMcq::to_mcq).collect())
}

/// Bank questions when available, else one templated question
pub fn generate_mcqs(topic: &str, difficulty: Difficulty) -> Vec<Mcq> {
    bank_mcqs(topic).unwrap_or_else(|| vec![template_for(difficulty).render(topic)])
}
