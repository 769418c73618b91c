//! Landing-page copy: hero, credentials, sections 01-03, call-to-action.

/// A run of hero text with an optional fixed emphasis color. The emphasis
/// colors are part of the brand treatment and do not follow the active
/// design system.
pub type HeroRun = (&'static str, Option<&'static str>);

pub const HERO_KICKER: &str = "HUMAN LIFE : AI LOGIC";

pub const HERO_LINE_1: &[HeroRun] = &[
    ("感覚", Some("#facc15")),
    ("や ", None),
    ("感情", Some("#facc15")),
    ("を", None),
    ("排除", Some("#ef4444")),
    ("し", None),
];

pub const HERO_LINE_2: &[HeroRun] = &[
    ("論理・データ", Some("#38bdf8")),
    ("で", None),
    ("健康", Some("#39ff14")),
    ("を", None),
    ("武装", Some("#d4af37")),
    ("せよ", None),
];

pub const CREDENTIALS: &[&str] = &["Google AI Essentials 修了", "健康管理士（取得予定）監修"];

pub const CREDENTIALS_NOTE: &str = "× ヨガ・トレーナー指導歴 5年以上";

pub const HERO_INTRO: &[&str] = &[
    "HUMAN LIFE : AI LOGICは",
    "あなたの詳細なデータを学習・解析した専属AIと、",
    "専門家のサポート・監視による",
    "24時間365日最短距離の「最適解」を選択として提示します。",
];

pub const AI_PLUS_TITLE: &str = "必要なのは、Googleの新プラン「AI Plus」だけ。";

pub const AI_PLUS_BODY: &[&str] = &[
    "月額1,200円（初回600円）の環境をご用意ください。",
    "それだけで、あなたのスマホが",
    "「最強の健康管理デバイス」に化けます。",
];

pub const CTA_LABEL: &str = "公式ラインから無料エントリー";

pub const CTA_NOTE: &str = "※ まずは公式ラインから無料カウンセリングシートを埋めてください";

pub const LOGIC_SECTION_TAG: &str = "01. THE LOGIC";
pub const LOGIC_TITLE: &str = "168時間 / 720時間の支配";

pub const LOGIC_PARAGRAPHS: &[&str] = &[
    "１週間は168時間、１カ月は720時間。",
    "週1回１時間の運動は、１週間のわずか 0.6% に過ぎません。",
    "残りの 99.4% の管理と選択が、自身を変える効率化の最大要素です。",
    "あなたの詳細なデータが入ってるAIを使って運動・食事・睡眠等の習慣が劇的に変わる無限の可能性を私と一緒に体験しましょう。",
    "HLALは、1日のすべてをロジカルに管理できます。",
];

pub const CORE_SECTION_TAG: &str = "02. THE CORE";

/// One feature card in THE CORE section. Each carries its own fixed accent
/// color for the icon/border treatment, independent of the active design
/// system, as on the production site.
#[derive(Debug, Clone, Copy)]
pub struct CoreFeature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

pub const CORE_FEATURES: &[CoreFeature] = &[
    CoreFeature {
        glyph: "◉",
        title: "一般論ではない、\"あなた専用\"の解答",
        desc: "単なるAI検索ではありません。あなたの身体データを完全に学習したAIが回答するため、一般的な健康アドバイスとは「精度」の次元が異なります。「一般的にはこれが良い」ではなく、「今のあなたの数値なら、これを食べるべき」という、世界で唯一のパーソナルな解を即座に提案します。",
        color: "#06b6d4",
    },
    CoreFeature {
        glyph: "⚡",
        title: "「決断コスト」からの完全な解放",
        desc: "「今日のご飯どうしよう？」「何を食べるべきか？」という些細な迷いが、貴重なウィルパワー（意志力）を消耗させます。HLALはあなたのコンシェルジュとして、常にその瞬間の最適解を提案します。「聞けば必ず正解がある」という安心感が、脳のストレスを劇的に軽減します。",
        color: "#fbbf24",
    },
    CoreFeature {
        glyph: "✚",
        title: "未病の段階で摘み取る「リスク管理」",
        desc: "米国などの医療先進国では、AIの診断精度が専門医を凌駕する事例も出ています。この「医療グレードの解析力」を日々の健康管理に応用します。病気になってから治すのではなく、数値が悪化する一歩手前で踏みとどまる。これはフィットネスではなく投資になり得ます。",
        color: "#f43f5e",
    },
    CoreFeature {
        glyph: "◎",
        title: "AIの死角を人間が埋める「責任構造」",
        desc: "AIには「ハルシネーション（もっともらしい嘘）」のリスクがゼロではありません。だからこそHLALは、不明確な点やリスクのある領域については断定を避け、「HAYATOへ相談」と返す安全装置（セーフティ）を組み込んでいます。週に一度、人間であるHAYATOがデータを直接確認し、責任ある判断を融合させています。",
        color: "#a78bfa",
    },
    CoreFeature {
        glyph: "❖",
        title: "一生を共にする「統合型ヘルス・デバイス」",
        desc: "食事、運動、睡眠。これらをバラバラのアプリで管理する時代は終わりました。Google AI Plusの高度な演算能力を持つGeminiに、あなたの健康情報のすべてを集約します。自分の身体データを誰よりも深く理解している「もう一人の自分」をポケットに入れて持ち歩く。それが、これからの時代の健康管理です。",
        color: "#34d399",
    },
];

pub const PLANS_SECTION_TAG: &str = "03. PLANS";

#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "BASIC",
        price: "¥10,000",
        period: "/ month",
        features: &[
            "パーソナライズされたGEMINI提供",
            "LINEによる週次レポートのチェック・週1相談",
        ],
        recommended: false,
    },
    Plan {
        name: "PRO",
        price: "¥15,000",
        period: "/ month",
        features: &[
            "BASICの全機能",
            "月1回の戦略ZOOMミーティング (30min)",
            "月間成果レポートPDF (資産としての記録)",
        ],
        recommended: true,
    },
];

pub const BOTTOM_CTA_LEAD: &str = "あなたの人生の99.4%を、論理で書き換える準備はできましたか？";

pub const LEGAL_LINK_LABEL: &str = "特定商取引法に基づく表記";

/// Weighted particle palette for the atmospheric decoration: red for blood
/// and vitality, gold for luxury and value, green for data and logic.
pub const PARTICLE_PALETTE: &[(&str, u32)] = &[("#dc2626", 40), ("#d4af37", 30), ("#10b981", 30)];
