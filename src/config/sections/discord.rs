//! Guild identifiers: channels, roles, categories and webhooks.

use super::BaseSections;

settings_section! {
    /// Channel IDs.
    pub struct Channels: "channels_" {
        announcements: u64 = 354_619_224_620_138_496,
        changelog: u64 = 748_238_795_236_704_388,
        mailing_lists: u64 = 704_372_456_592_506_880,
        python_events: u64 = 729_674_110_270_963_822,
        python_news: u64 = 704_372_456_592_506_880,
        reddit: u64 = 458_224_812_528_238_616,

        dev_contrib: u64 = 635_950_537_262_759_947,
        dev_core: u64 = 411_200_599_653_351_425,
        dev_log: u64 = 622_895_325_144_940_554,

        meta: u64 = 429_409_067_623_251_969,
        python_general: u64 = 267_624_335_836_053_506,

        python_help: u64 = 1_035_199_133_436_354_600,

        attachment_log: u64 = 649_243_850_006_855_680,
        filter_log: u64 = 1_014_943_924_185_473_094,
        message_log: u64 = 467_752_170_159_079_424,
        mod_log: u64 = 282_638_479_504_965_634,
        nomination_voting_archive: u64 = 833_371_042_046_148_738,
        user_log: u64 = 528_976_905_546_760_203,
        voice_log: u64 = 640_292_421_988_646_961,

        off_topic_0: u64 = 291_284_109_232_308_226,
        off_topic_1: u64 = 463_035_241_142_026_251,
        off_topic_2: u64 = 463_035_268_514_185_226,

        bot_commands: u64 = 267_659_945_086_812_160,
        discord_bots: u64 = 343_944_376_055_103_488,
        esoteric: u64 = 470_884_583_684_964_352,
        voice_gate: u64 = 764_802_555_427_029_012,
        code_jam_planning: u64 = 490_217_981_872_177_157,

        // Staff
        admins: u64 = 365_960_823_622_991_872,
        admin_spam: u64 = 563_594_791_770_914_816,
        defcon: u64 = 464_469_101_889_454_091,
        helpers: u64 = 385_474_242_440_986_624,
        incidents: u64 = 714_214_212_200_562_749,
        incidents_archive: u64 = 720_668_923_636_351_037,
        mod_alerts: u64 = 473_092_532_147_060_736,
        mod_meta: u64 = 775_412_552_795_947_058,
        mods: u64 = 305_126_844_661_760_000,
        nominations: u64 = 822_920_136_150_745_168,
        nomination_voting: u64 = 822_853_512_709_931_008,
        organisation: u64 = 551_789_653_284_356_126,

        // Staff announcements
        admin_announcements: u64 = 749_736_155_569_848_370,
        mod_announcements: u64 = 372_115_205_867_700_225,
        staff_announcements: u64 = 464_033_278_631_084_042,
        staff_info: u64 = 396_684_402_404_622_347,
        staff_lounge: u64 = 464_905_259_261_755_392,

        // Voice
        admins_voice: u64 = 500_734_494_840_717_332,
        code_help_voice_0: u64 = 751_592_231_726_481_530,
        code_help_voice_1: u64 = 764_232_549_840_846_858,
        general_voice_0: u64 = 751_591_688_538_947_646,
        general_voice_1: u64 = 799_641_437_645_701_151,
        staff_voice: u64 = 412_375_055_910_043_655,

        black_formatter: u64 = 846_434_317_021_741_086,

        // Voice chat
        code_help_chat_0: u64 = 755_154_969_761_677_312,
        code_help_chat_1: u64 = 766_330_079_135_268_884,
        staff_voice_chat: u64 = 541_638_762_007_101_470,
        voice_chat_0: u64 = 412_357_430_186_344_448,
        voice_chat_1: u64 = 799_647_045_886_541_885,

        big_brother: u64 = 468_507_907_357_409_333,
        duck_pond: u64 = 637_820_308_341_915_648,
        roles: u64 = 851_270_062_434_156_586,
    }
}

settings_section! {
    /// Role IDs.
    pub struct Roles: "roles_" {
        // Self-assignable
        advent_of_code: u64 = 518_565_788_744_024_082,
        announcements: u64 = 463_658_397_560_995_840,
        lovefest: u64 = 542_431_903_886_606_399,
        pyweek_announcements: u64 = 897_568_414_044_938_310,
        revival_of_code: u64 = 988_801_794_668_908_655,
        legacy_help_channels_access: u64 = 1_074_780_483_776_417_964,

        contributors: u64 = 295_488_872_404_484_098,
        help_cooldown: u64 = 699_189_276_025_421_825,
        muted: u64 = 277_914_926_603_829_249,
        partners: u64 = 323_426_753_857_191_936,
        python_community: u64 = 458_226_413_825_294_336,
        voice_verified: u64 = 764_802_720_779_337_729,

        // Streaming
        video: u64 = 764_245_844_798_079_016,

        // Staff
        admins: u64 = 267_628_507_062_992_896,
        core_developers: u64 = 587_606_783_669_829_632,
        code_jam_event_team: u64 = 787_816_728_474_288_181,
        devops: u64 = 409_416_496_733_880_320,
        domain_leads: u64 = 807_415_650_778_742_785,
        events_lead: u64 = 778_361_735_739_998_228,
        helpers: u64 = 267_630_620_367_257_601,
        moderators: u64 = 831_776_746_206_265_384,
        mod_team: u64 = 267_629_731_250_176_001,
        owners: u64 = 267_627_879_762_755_584,
        project_leads: u64 = 815_701_647_526_330_398,

        jammers: u64 = 737_249_140_966_162_473,

        patreon_tier_1: u64 = 505_040_943_800_516_611,
        patreon_tier_2: u64 = 743_399_725_914_390_631,
        patreon_tier_3: u64 = 743_400_204_367_036_520,
    }
}

settings_section! {
    /// Channel category IDs.
    pub struct Categories: "categories_" {
        logs: u64 = 468_520_609_152_892_958,
        moderators: u64 = 749_736_277_464_842_262,
        modmail: u64 = 714_494_672_835_444_826,
        appeals: u64 = 890_331_800_025_563_216,
        appeals_2: u64 = 895_417_395_261_341_766,
        voice: u64 = 356_013_253_765_234_688,
        summer_code_jam: u64 = 861_692_638_540_857_384,
    }
}

settings_section! {
    /// Guild-wide identifiers and ID groupings.
    pub struct Guild: "guild_" with base: &BaseSections<'_> {
        id: u64 = 267_624_335_836_053_506,
        invite: String = "https://discord.gg/python".to_owned(),

        moderation_categories: Vec<u64> = vec![
            base.categories.moderators,
            base.categories.modmail,
            base.categories.logs,
            base.categories.appeals,
            base.categories.appeals_2,
        ],
        moderation_channels: Vec<u64> = vec![
            base.channels.admins,
            base.channels.admin_spam,
            base.channels.mods,
        ],
        /// Channels whose events are never written to the mod log.
        modlog_blacklist: Vec<u64> = vec![
            base.channels.attachment_log,
            base.channels.message_log,
            base.channels.mod_log,
            base.channels.staff_voice,
            base.channels.filter_log,
        ],
        reminder_whitelist: Vec<u64> = vec![
            base.channels.bot_commands,
            base.channels.dev_contrib,
            base.channels.black_formatter,
        ],
        moderation_roles: Vec<u64> = vec![
            base.roles.admins,
            base.roles.mod_team,
            base.roles.moderators,
            base.roles.owners,
        ],
        staff_roles: Vec<u64> = vec![
            base.roles.admins,
            base.roles.helpers,
            base.roles.mod_team,
            base.roles.owners,
        ],
    }
}

settings_record! {
    /// A webhook and the channel it posts to.
    pub struct Webhook {
        id: u64,
        channel: Option<u64>,
    }
}

impl Webhook {
    const fn new(id: u64, channel: u64) -> Self {
        Self {
            id,
            channel: Some(channel),
        }
    }
}

settings_section! {
    /// Webhooks, overridable per sub-field as `WEBHOOKS_<NAME>__ID`.
    pub struct Webhooks: "webhooks_" with base: &BaseSections<'_> {
        big_brother: Webhook = Webhook::new(569_133_704_568_373_283, base.channels.big_brother),
        dev_log: Webhook = Webhook::new(680_501_655_111_729_222, base.channels.dev_log),
        duck_pond: Webhook = Webhook::new(637_821_475_327_311_927, base.channels.duck_pond),
        incidents: Webhook = Webhook::new(816_650_601_844_572_212, base.channels.incidents),
        incidents_archive: Webhook =
            Webhook::new(720_671_599_790_915_702, base.channels.incidents_archive),
        python_news: Webhook = Webhook::new(704_381_182_279_942_324, base.channels.python_news),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::OverrideSources;

    #[test]
    fn test_guild_defaults_follow_resolved_roles() {
        let sources = OverrideSources::new().with_env_vars([("ROLES_ADMINS", "1")]);
        let roles = Roles::load(&sources).unwrap();
        let channels = Channels::defaults();
        let categories = Categories::defaults();
        let base = BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };

        let guild = Guild::load(&base, &sources).unwrap();
        assert_eq!(guild.moderation_roles[0], 1);
        assert_eq!(guild.staff_roles[0], 1);
    }

    #[test]
    fn test_guild_list_override_replaces_default() {
        let channels = Channels::defaults();
        let roles = Roles::defaults();
        let categories = Categories::defaults();
        let base = BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };
        let sources = OverrideSources::new().with_env_vars([("GUILD_MODERATION_CHANNELS", "[1, 2]")]);

        let guild = Guild::load(&base, &sources).unwrap();
        assert_eq!(guild.moderation_channels, vec![1, 2]);
    }

    #[test]
    fn test_webhook_sub_field_override() {
        let channels = Channels::defaults();
        let roles = Roles::defaults();
        let categories = Categories::defaults();
        let base = BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };
        let sources = OverrideSources::new()
            .with_file_values(".env", [("WEBHOOKS_DUCK_POND__ID", "5"), ("WEBHOOKS_DEV_LOG__CHANNEL", "")]);

        let webhooks = Webhooks::load(&base, &sources).unwrap();
        assert_eq!(webhooks.duck_pond.id, 5);
        assert_eq!(webhooks.duck_pond.channel, Some(channels.duck_pond));
        assert_eq!(webhooks.dev_log.channel, None);
    }

    #[test]
    fn test_channel_defaults() {
        let channels = Channels::defaults();
        assert_eq!(channels.python_help, 1_035_199_133_436_354_600);
        assert_eq!(channels.mailing_lists, channels.python_news);
    }
}
