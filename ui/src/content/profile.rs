//! Profile-page copy: the representative's bio.

pub const PROFILE_NAME: &str = "藤田 勇人";
pub const PROFILE_NAME_ROMAJI: &str = "Hayato Fujita";
pub const PROFILE_ROLE: &str = "HumanLife: AI Logic (HLAL) 代表";
pub const PROFILE_TAGLINE: &str = "Googleの脳を持つ、健康管理士。";

pub const CATCHPHRASE_REJECTED: &[&str] = &["「根性論」", "『感覚』"];
pub const CATCHPHRASE_TAIL: &str = "はもうやめて。";
pub const CATCHPHRASE_OFFER_LEAD: &str = "知恵を統合した ";
pub const CATCHPHRASE_OFFER_EMPHASIS: &str = "Health AI OS";
pub const CATCHPHRASE_OFFER_TAIL: &str = " を手に入れてください!";

#[derive(Debug, Clone, Copy)]
pub struct ProfileSection {
    pub glyph: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const PROFILE_SECTIONS: &[ProfileSection] = &[
    ProfileSection {
        glyph: "↺",
        heading: "BACKGROUND",
        paragraphs: &[
            "私は元々、NBAのサマーリーグ挑戦やプロダンサーとして、身体を極限まで酷使するアスリート生活を送っていました。かつては「気合と根性で限界を超える」ことが正義だと信じていた時期もあります。",
        ],
    },
    ProfileSection {
        glyph: "◎",
        heading: "THE CHALLENGE",
        paragraphs: &[
            "現代は情報で溢れかえっています。無数の健康法の中から「自分にとって本当に何が良いのか」を精査するのは容易ではありません。",
            "また、日々の仕事や生活に追われ、自分の健康のため運動に割ける時間がほとんどないという方も多いはずです。",
            "私自身も現在、母の世話というライフステージの変化に直面し、時間と体力の制約の中で生きています。だからこそ、私は追求しました。",
            "「いかに継続しやすく、いかに短時間で、最大の健康効果を出すか」",
            "その答えが、私の身体的経験と、最新のAI解析を融合させた独自のメソッドです。",
        ],
    },
    ProfileSection {
        glyph: "⌬",
        heading: "THE SOLUTION",
        paragraphs: &[
            "私が提供するのは、一般的なフィットネスではありません。あなたのライフスタイル、特性、そして個別の事情や情報をAI（Google Gemini）が解析し、健康管理士である私がその実行をサポートする。",
            "あなた専属の「AI Health OS」をインストールする",
            "ようなものです。",
        ],
    },
    ProfileSection {
        glyph: "❝",
        heading: "MESSAGE",
        paragraphs: &[
            "「情報に振り回されたくない」「時間がない経営者」そして何より、「運動は嫌いだけどダイエットしたい」「AIが好き、健康になりたい」そんな方にこそ、私のメソッドは最大の効果を発揮します。",
            "私と一緒に、あなたの人生を支える最強の身体（ハードウェア）と論理（ソフトウェア）を構築しましょう。",
        ],
    },
];

pub const CAREER_HEADING: &str = "CAREER";
pub const CAREER_GLYPH: &str = "✦";

pub const CAREER_ENTRIES: &[(&str, &str)] = &[
    ("Challenge", "NBA Summer League トライアウト参加（3度渡米）"),
    (
        "Media/Stage",
        "EXILE ドームツアーダンサー、青山テルマMV・TV出演 他",
    ),
    (
        "Teaching",
        "年間600本以上のオンラインヨガクラス指導・オンラインパーソナル指導",
    ),
];
