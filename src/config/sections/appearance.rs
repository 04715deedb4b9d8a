//! Embed colours, custom emojis and icon URLs.

use crate::config::Colour;

settings_section! {
    /// Embed colours, overridable as hex (`COLOURS_BLUE=0x3775a8`).
    pub struct Colours: "colours_" {
        blue: Colour = Colour(0x0037_75a8),
        bright_green: Colour = Colour(0x0001_d277),
        orange: Colour = Colour(0x00e6_7e22),
        pink: Colour = Colour(0x00cf_84e0),
        purple: Colour = Colour(0x00b7_34eb),
        soft_green: Colour = Colour(0x0068_c290),
        soft_orange: Colour = Colour(0x00f9_cb54),
        soft_red: Colour = Colour(0x00cd_6d6d),
        white: Colour = Colour(0x00ff_fffe),
        yellow: Colour = Colour(0x00ff_d241),
    }
}

settings_section! {
    pub struct Emojis: "emojis_" {
        badge_bug_hunter: String = "<:bug_hunter_lvl1:743882896372269137>".to_owned(),
        badge_bug_hunter_level_2: String = "<:bug_hunter_lvl2:743882896611344505>".to_owned(),
        badge_early_supporter: String = "<:early_supporter:743882896909140058>".to_owned(),
        badge_hypesquad: String = "<:hypesquad_events:743882896892362873>".to_owned(),
        badge_hypesquad_balance: String = "<:hypesquad_balance:743882896460480625>".to_owned(),
        badge_hypesquad_bravery: String = "<:hypesquad_bravery:743882896745693335>".to_owned(),
        badge_hypesquad_brilliance: String = "<:hypesquad_brilliance:743882896938631248>".to_owned(),
        badge_partner: String = "<:partner:748666453242413136>".to_owned(),
        badge_staff: String = "<:discord_staff:743882896498098226>".to_owned(),
        badge_verified_bot_developer: String = "<:verified_bot_dev:743882897299210310>".to_owned(),
        verified_bot: String = "<:verified_bot:811645219220750347>".to_owned(),
        bot: String = "<:bot:812712599464443914>".to_owned(),

        defcon_shutdown: String = "<:defcondisabled:470326273952972810>".to_owned(),
        defcon_unshutdown: String = "<:defconenabled:470326274213150730>".to_owned(),
        defcon_update: String = "<:defconsettingsupdated:470326274082996224>".to_owned(),

        failmail: String = "<:failmail:633660039931887616>".to_owned(),

        incident_actioned: String = "<:incident_actioned:714221559279255583>".to_owned(),
        incident_investigating: String = "<:incident_investigating:714224190928191551>".to_owned(),
        incident_unactioned: String = "<:incident_unactioned:714223099645526026>".to_owned(),

        status_dnd: String = "<:status_dnd:470326272082313216>".to_owned(),
        status_idle: String = "<:status_idle:470326266625785866>".to_owned(),
        status_offline: String = "<:status_offline:470326266537705472>".to_owned(),
        status_online: String = "<:status_online:470326272351010816>".to_owned(),

        ducky_dave: String = "<:ducky_dave:742058418692423772>".to_owned(),

        trashcan: String = "<:trashcan:637136429717389331>".to_owned(),

        bullet: String = "\u{2022}".to_owned(),
        check_mark: String = "\u{2705}".to_owned(),
        cross_mark: String = "\u{274C}".to_owned(),
        new: String = "\u{1F195}".to_owned(),
        pencil: String = "\u{270F}".to_owned(),

        ok_hand: String = ":ok_hand:".to_owned(),
    }
}

settings_section! {
    pub struct Icons: "icons_" {
        crown_blurple: String = "https://cdn.discordapp.com/emojis/469964153289965568.png".to_owned(),
        crown_green: String = "https://cdn.discordapp.com/emojis/469964154719961088.png".to_owned(),
        crown_red: String = "https://cdn.discordapp.com/emojis/469964154879344640.png".to_owned(),

        defcon_denied: String = "https://cdn.discordapp.com/emojis/472475292078964738.png".to_owned(),
        defcon_shutdown: String = "https://cdn.discordapp.com/emojis/470326273952972810.png".to_owned(),
        defcon_unshutdown: String = "https://cdn.discordapp.com/emojis/470326274213150730.png".to_owned(),
        defcon_update: String = "https://cdn.discordapp.com/emojis/472472638342561793.png".to_owned(),

        filtering: String = "https://cdn.discordapp.com/emojis/472472638594482195.png".to_owned(),

        green_checkmark: String = "https://raw.githubusercontent.com/python-discord/branding/main/icons/checkmark/green-checkmark-dist.png".to_owned(),
        green_questionmark: String = "https://raw.githubusercontent.com/python-discord/branding/main/icons/checkmark/green-question-mark-dist.png".to_owned(),
        guild_update: String = "https://cdn.discordapp.com/emojis/469954765141442561.png".to_owned(),

        hash_blurple: String = "https://cdn.discordapp.com/emojis/469950142942806017.png".to_owned(),
        hash_green: String = "https://cdn.discordapp.com/emojis/469950144918585344.png".to_owned(),
        hash_red: String = "https://cdn.discordapp.com/emojis/469950145413251072.png".to_owned(),

        message_bulk_delete: String = "https://cdn.discordapp.com/emojis/469952898994929668.png".to_owned(),
        message_delete: String = "https://cdn.discordapp.com/emojis/472472641320648704.png".to_owned(),
        message_edit: String = "https://cdn.discordapp.com/emojis/472472638976163870.png".to_owned(),

        pencil: String = "https://cdn.discordapp.com/emojis/470326272401211415.png".to_owned(),

        questionmark: String = "https://cdn.discordapp.com/emojis/512367613339369475.png".to_owned(),

        remind_blurple: String = "https://cdn.discordapp.com/emojis/477907609215827968.png".to_owned(),
        remind_green: String = "https://cdn.discordapp.com/emojis/477907607785570310.png".to_owned(),
        remind_red: String = "https://cdn.discordapp.com/emojis/477907608057937930.png".to_owned(),

        sign_in: String = "https://cdn.discordapp.com/emojis/469952898181234698.png".to_owned(),
        sign_out: String = "https://cdn.discordapp.com/emojis/469952898089091082.png".to_owned(),

        superstarify: String = "https://cdn.discordapp.com/emojis/636288153044516874.png".to_owned(),
        unsuperstarify: String = "https://cdn.discordapp.com/emojis/636288201258172446.png".to_owned(),

        token_removed: String = "https://cdn.discordapp.com/emojis/470326273298792469.png".to_owned(),

        user_ban: String = "https://cdn.discordapp.com/emojis/469952898026045441.png".to_owned(),
        user_mute: String = "https://cdn.discordapp.com/emojis/472472640100106250.png".to_owned(),
        user_unban: String = "https://cdn.discordapp.com/emojis/469952898692808704.png".to_owned(),
        user_unmute: String = "https://cdn.discordapp.com/emojis/472472639206719508.png".to_owned(),
        user_update: String = "https://cdn.discordapp.com/emojis/469952898684551168.png".to_owned(),
        user_verified: String = "https://cdn.discordapp.com/emojis/470326274519334936.png".to_owned(),
        user_warn: String = "https://cdn.discordapp.com/emojis/470326274238447633.png".to_owned(),

        voice_state_blue: String = "https://cdn.discordapp.com/emojis/656899769662439456.png".to_owned(),
        voice_state_green: String = "https://cdn.discordapp.com/emojis/656899770094452754.png".to_owned(),
        voice_state_red: String = "https://cdn.discordapp.com/emojis/656899769905709076.png".to_owned(),
    }
}
