//! Built-in curated content.

use crate::types::entry::Difficulty::{self, Easy, Hard, Medium};
use crate::types::entry::{Idiom, Word};

pub const EASY_WORDS: &[&str] = &[
    "happy", "quick", "bright", "kind", "clean", "warm", "free", "safe", "simple", "friend",
    "strong", "good", "nice", "big", "small", "new", "old", "young", "fast", "slow", "hot",
    "cold", "long", "short", "high", "low", "light", "dark", "open", "close", "easy", "hard",
];

pub const MEDIUM_WORDS: &[&str] = &[
    "analyze", "influence", "consider", "experience", "opportunity", "challenge", "environment",
    "technology", "community", "creative", "perspective", "establish", "significant", "develop",
    "achieve", "determine", "require", "provide", "increase", "improve", "manage", "organize",
    "process", "solution", "strategy", "system", "research", "effective", "efficient",
    "important", "necessary", "possible",
];

pub const HARD_WORDS: &[&str] = &[
    "paradigm", "meticulous", "ambiguous", "contemplate", "sophisticated", "intricate",
    "inevitable", "synthesize", "profound", "ameliorate", "ubiquitous", "ephemeral", "eloquent",
    "pragmatic", "comprehensive", "fundamental", "substantial", "distinguish", "implement",
    "facilitate", "demonstrate", "consequence", "phenomenon", "hypothesis", "methodology",
    "theoretical", "empirical", "contemporary", "conventional", "innovative",
];

fn idiom(
    english: &str,
    japanese: &str,
    example: &str,
    explanation: &str,
    difficulty: Difficulty,
) -> Idiom {
    Idiom::new(english, japanese, example, explanation, difficulty)
}

#[allow(clippy::too_many_arguments)]
fn word(
    english: &str,
    japanese: &str,
    part_of_speech: &str,
    pronunciation: &str,
    definition: &str,
    examples: &[&str],
    synonyms: &[&str],
    antonyms: &[&str],
    difficulty: Difficulty,
) -> Word {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    Word {
        english: english.to_string(),
        japanese: japanese.to_string(),
        part_of_speech: part_of_speech.to_string(),
        pronunciation: Some(pronunciation.to_string()),
        definition: definition.to_string(),
        example_sentences: owned(examples),
        synonyms: owned(synonyms),
        antonyms: owned(antonyms),
        audio_url: None,
        difficulty,
    }
}

/// Copyright-free idioms.
pub fn idioms() -> Vec<Idiom> {
    vec![
    idiom(
        "A piece of cake",
        "朝飯前、簡単なこと",
        "The exam was a piece of cake for her.",
        "非常に簡単で楽にできること",
        Easy,
    ),
    idiom(
        "Break the ice",
        "場を和ませる、緊張をほぐす",
        "He told a joke to break the ice at the meeting.",
        "初対面の人との緊張した雰囲気を和らげるために何かをすること",
        Easy,
    ),
    idiom(
        "Hit the nail on the head",
        "核心を突く、的確に言い当てる",
        "You hit the nail on the head with that analysis.",
        "問題の核心を正確に指摘すること",
        Medium,
    ),
    idiom(
        "Bite the bullet",
        "苦しいことを耐え忍ぶ",
        "I had to bite the bullet and tell him the truth.",
        "不快な状況を我慢して耐えること",
        Medium,
    ),
    idiom(
        "Pull someone's leg",
        "冗談を言う、からかう",
        "Don't worry, I was just pulling your leg.",
        "冗談を言って人をからかうこと",
        Medium,
    ),
    idiom(
        "Cost an arm and a leg",
        "非常に高価である",
        "That car costs an arm and a leg.",
        "非常に高価であること",
        Easy,
    ),
    idiom(
        "Let the cat out of the bag",
        "秘密を漏らす",
        "I accidentally let the cat out of the bag about the surprise party.",
        "秘密を意図せずに漏らしてしまうこと",
        Medium,
    ),
    idiom(
        "Kill two birds with one stone",
        "一石二鳥",
        "By taking the train, I can kill two birds with one stone - save money and help the environment.",
        "一つの行動で二つの目的を達成すること",
        Easy,
    ),
    idiom(
        "The ball is in your court",
        "次はあなたの番です",
        "I've made my offer, now the ball is in your court.",
        "次に行動するのはあなたの番であること",
        Hard,
    ),
    idiom(
        "Spill the beans",
        "秘密を漏らす",
        "Don't spill the beans about the surprise!",
        "秘密を漏らしてしまうこと",
        Medium,
    ),
    idiom(
        "Break a leg",
        "Good luck! (特に演劇やパフォーマンスで)",
        "Break a leg in your performance tonight!",
        "Good luck! (特に演劇やパフォーマンスで)",
        Easy,
    ),
    idiom(
        "Call it a day",
        "今日はここまでにする、終わりにする",
        "It's getting late, let's call it a day.",
        "今日はここまでにする、終わりにする",
        Easy,
    ),
    idiom(
        "Get out of hand",
        "制御不能になる、手に負えなくなる",
        "The party got out of hand when too many people showed up.",
        "制御不能になる、手に負えなくなる",
        Easy,
    ),
    idiom(
        "Hit the sack",
        "寝る、ベッドに入る",
        "I'm tired, I'm going to hit the sack.",
        "寝る、ベッドに入る",
        Medium,
    ),
    idiom(
        "Miss the boat",
        "機会を逃す、遅れる",
        "You missed the boat on that job opportunity.",
        "機会を逃す、遅れる",
        Medium,
    ),
    idiom(
        "On the ball",
        "機敏な、注意深い",
        "She's really on the ball with her work.",
        "機敏な、注意深い",
        Medium,
    ),
    idiom(
        "Pull yourself together",
        "落ち着く、冷静になる",
        "Pull yourself together and focus on the task.",
        "落ち着く、冷静になる",
        Medium,
    ),
    idiom(
        "So far so good",
        "今のところ順調だ",
        "How's the project going? So far so good.",
        "今のところ順調だ",
        Hard,
    ),
    idiom(
        "Speak of the devil",
        "噂をすれば影（その人が現れる）",
        "Speak of the devil, here comes John now.",
        "噂をすれば影（その人が現れる）",
        Hard,
    ),
    idiom(
        "That's the last straw",
        "もう我慢の限界だ",
        "That's the last straw! I'm quitting this job.",
        "もう我慢の限界だ",
        Hard,
    ),
    idiom(
        "Under the weather",
        "体調が悪い、気分が優れない",
        "I'm feeling a bit under the weather today.",
        "体調が悪い、気分が優れない",
        Easy,
    ),
    idiom(
        "Get over it",
        "乗り越える、諦める",
        "You need to get over it and move on.",
        "乗り越える、諦める",
        Medium,
    ),
    idiom(
        "Look on the bright side",
        "良い面を見る、楽観的に考える",
        "Look on the bright side, at least you tried.",
        "良い面を見る、楽観的に考える",
        Medium,
    ),
    idiom(
        "Take it easy",
        "気楽にする、リラックスする",
        "Take it easy, don't stress too much.",
        "気楽にする、リラックスする",
        Easy,
    ),
    idiom(
        "Get the hang of it",
        "コツを掴む、慣れる",
        "It takes time to get the hang of driving.",
        "コツを掴む、慣れる",
        Medium,
    ),
    idiom(
        "A dime a dozen",
        "ありふれた、珍しくない",
        "Those kinds of jobs are a dime a dozen.",
        "非常にありふれていて珍しくないこと",
        Medium,
    ),
    idiom(
        "Beat around the bush",
        "遠回しに言う、要点を避ける",
        "Stop beating around the bush and tell me the truth.",
        "直接的な言い方を避けて遠回しに言うこと",
        Medium,
    ),
    idiom(
        "Cut corners",
        "手抜きをする、コストを削減する",
        "They cut corners to finish the project on time.",
        "品質を落として時間やコストを節約すること",
        Medium,
    ),
    idiom(
        "Get your act together",
        "しっかりする、改善する",
        "You need to get your act together if you want to succeed.",
        "行動を改善してより良い結果を得ること",
        Hard,
    ),
    idiom(
        "Hit the road",
        "出発する、旅立つ",
        "It's time to hit the road and go home.",
        "出発すること、旅立つこと",
        Easy,
    ),
    idiom(
        "It's not rocket science",
        "複雑ではない、簡単だ",
        "Cooking pasta is not rocket science.",
        "非常に複雑ではない、理解しやすいこと",
        Medium,
    ),
    idiom(
        "Jump on the bandwagon",
        "流行に乗る、追随する",
        "Many companies are jumping on the AI bandwagon.",
        "流行やトレンドに追随すること",
        Hard,
    ),
    idiom(
        "Keep your chin up",
        "元気を出す、希望を失わない",
        "Keep your chin up, things will get better.",
        "困難な状況でも希望を失わずにいること",
        Medium,
    ),
    idiom(
        "Make a long story short",
        "手短に言うと、要約すると",
        "To make a long story short, we decided to move.",
        "長い話を短く要約すること",
        Medium,
    ),
    idiom(
        "No pain, no gain",
        "努力なくして成功なし",
        "No pain, no gain - you have to work hard to succeed.",
        "努力や苦労なくしては成功できないこと",
        Easy,
    ),
    ]
}

/// Fully described words served when the dictionary is unavailable.
pub fn fallback_words() -> Vec<Word> {
    vec![
    word(
        "happy",
        "幸せな、嬉しい",
        "adjective",
        "/ˈhæpi/",
        "Feeling or showing pleasure or contentment",
        &["She felt happy when she received the good news.", "The children were happy to see their grandparents."],
        &["joyful", "cheerful", "glad"],
        &["sad", "unhappy", "miserable"],
        Easy,
    ),
    word(
        "quick",
        "速い、急速な",
        "adjective",
        "/kwɪk/",
        "Moving fast or doing something in a short time",
        &["She gave a quick answer to the question.", "We need a quick solution to this problem."],
        &["fast", "rapid", "swift"],
        &["slow", "sluggish", "delayed"],
        Easy,
    ),
    word(
        "good",
        "良い",
        "adjective",
        "/ɡʊd/",
        "Having positive qualities; satisfactory",
        &["That was a good movie.", "She is a good student."],
        &["excellent", "great", "fine"],
        &["bad", "poor", "terrible"],
        Easy,
    ),
    word(
        "important",
        "重要な",
        "adjective",
        "/ɪmˈpɔrtənt/",
        "Having great significance or value",
        &["It is important to study hard.", "This is an important meeting."],
        &["significant", "crucial", "vital"],
        &["unimportant", "trivial", "minor"],
        Medium,
    ),
    word(
        "understand",
        "理解する",
        "verb",
        "/ˌʌndərˈstænd/",
        "To comprehend the meaning or importance of something",
        &["I understand the lesson now.", "Do you understand what I mean?"],
        &["comprehend", "grasp", "realize"],
        &["misunderstand", "confuse"],
        Medium,
    ),
    word(
        "develop",
        "発展する、開発する",
        "verb",
        "/dɪˈveləp/",
        "To grow or cause to grow gradually",
        &["The company will develop new products.", "Children develop quickly."],
        &["create", "build", "improve"],
        &["destroy", "decline"],
        Medium,
    ),
    word(
        "sophisticated",
        "洗練された、高度な",
        "adjective",
        "/səˈfɪstɪkeɪtɪd/",
        "Having advanced knowledge, experience, or understanding",
        &["The software uses sophisticated algorithms.", "She has very sophisticated taste in art."],
        &["refined", "advanced", "complex"],
        &["simple", "naive", "unsophisticated"],
        Hard,
    ),
    word(
        "inevitable",
        "避けられない、必然的な",
        "adjective",
        "/ɪnˈevɪtəbəl/",
        "Certain to happen; unavoidable",
        &["Change is inevitable in any organization.", "The inevitable conclusion was that he was guilty."],
        &["unavoidable", "certain", "inescapable"],
        &["avoidable", "preventable", "optional"],
        Hard,
    ),
    word(
        "comprehensive",
        "包括的な、総合的な",
        "adjective",
        "/ˌkɒmprɪˈhensɪv/",
        "Complete and including everything that is necessary",
        &["We need a comprehensive plan.", "The report provides comprehensive information."],
        &["complete", "thorough", "extensive"],
        &["incomplete", "partial", "limited"],
        Hard,
    ),
    word(
        "beautiful",
        "美しい",
        "adjective",
        "/ˈbjuːtɪf(ə)l/",
        "Pleasing the senses or mind aesthetically",
        &["The sunset was absolutely beautiful.", "She wore a beautiful dress to the party."],
        &["gorgeous", "lovely", "attractive"],
        &["ugly", "hideous", "unattractive"],
        Easy,
    ),
    word(
        "wonderful",
        "素晴らしい",
        "adjective",
        "/ˈwʌndəf(ə)l/",
        "Inspiring delight, pleasure, or admiration",
        &["We had a wonderful time at the beach.", "The concert was absolutely wonderful."],
        &["amazing", "fantastic", "marvelous"],
        &["terrible", "awful", "horrible"],
        Easy,
    ),
    word(
        "adequate",
        "適切な、十分な",
        "adjective",
        "/ˈædɪkwət/",
        "Satisfactory or acceptable in quality or quantity",
        &["The salary was adequate for my needs.", "We need adequate preparation for the exam."],
        &["sufficient", "satisfactory", "acceptable"],
        &["inadequate", "insufficient", "unsatisfactory"],
        Medium,
    ),
    word(
        "consequence",
        "結果、影響",
        "noun",
        "/ˈkɒnsɪkw(ə)ns/",
        "A result or effect of an action or condition",
        &["The consequence of not studying was failing the test.", "Every action has a consequence."],
        &["result", "outcome", "effect"],
        &[],
        Medium,
    ),
    word(
        "demonstrate",
        "実証する、示す",
        "verb",
        "/ˈdemənstreɪt/",
        "Clearly show the existence or truth of something",
        &["The teacher will demonstrate the experiment.", "This research demonstrates the importance of sleep."],
        &["show", "prove", "illustrate"],
        &[],
        Medium,
    ),
    word(
        "serendipity",
        "偶然の発見、思わぬ発見",
        "noun",
        "/ˌserənˈdɪpɪti/",
        "The occurrence and development of events by chance in a happy or beneficial way",
        &["It was pure serendipity that led me to find this amazing book.", "The discovery of penicillin was a famous case of serendipity in science."],
        &["chance", "luck", "fortune"],
        &[],
        Hard,
    ),
    word(
        "ephemeral",
        "短命な、つかの間の",
        "adjective",
        "/ɪˈfemərəl/",
        "Lasting for a very short time",
        &["The beauty of cherry blossoms is ephemeral.", "Social media trends are often ephemeral."],
        &["temporary", "fleeting", "transient"],
        &["permanent", "lasting", "enduring"],
        Hard,
    ),
    word(
        "ubiquitous",
        "いたるところにある、遍在する",
        "adjective",
        "/juːˈbɪkwɪtəs/",
        "Present, appearing, or found everywhere",
        &["Smartphones have become ubiquitous in modern society.", "The ubiquitous presence of social media affects our daily lives."],
        &["omnipresent", "pervasive", "widespread"],
        &["rare", "scarce", "absent"],
        Hard,
    ),
    word(
        "resilience",
        "回復力、復元力",
        "noun",
        "/rɪˈzɪlɪəns/",
        "The ability to recover quickly from difficult conditions",
        &["Her resilience helped her overcome many challenges.", "The team showed great resilience after their defeat."],
        &["toughness", "strength", "endurance"],
        &["weakness", "fragility", "vulnerability"],
        Hard,
    ),
    ]
}
