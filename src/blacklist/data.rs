use phf::phf_set;

/// Disposable / temporary mailbox providers shipped with the crate.
pub(crate) static BUNDLED_DOMAINS: phf::Set<&'static str> = phf_set! {
    "0-00.usa.cc",
    "0-mail.com",
    "0815.ru",
    "0clickemail.com",
    "10minutemail.co.uk",
    "10minutemail.com",
    "10minutemail.net",
    "10minutesmail.com",
    "20minutemail.com",
    "33mail.com",
    "anonbox.net",
    "anonymbox.com",
    "bccto.me",
    "binkmail.com",
    "bobmail.info",
    "burnermail.io",
    "chacuo.net",
    "crazymailing.com",
    "deadaddress.com",
    "discard.email",
    "discardmail.com",
    "dispostable.com",
    "dropmail.me",
    "emailondeck.com",
    "emailtemporanea.net",
    "fakeinbox.com",
    "fakemail.net",
    "filzmail.com",
    "getairmail.com",
    "getnada.com",
    "guerrillamail.biz",
    "guerrillamail.com",
    "guerrillamail.de",
    "guerrillamail.info",
    "guerrillamail.net",
    "guerrillamail.org",
    "guerrillamailblock.com",
    "harakirimail.com",
    "incognitomail.org",
    "inboxbear.com",
    "jetable.org",
    "mail-temporaire.fr",
    "mailcatch.com",
    "maildrop.cc",
    "mailexpire.com",
    "mailforspam.com",
    "mailinator.com",
    "mailinator.net",
    "mailinator2.com",
    "mailnesia.com",
    "mailnull.com",
    "mailsac.com",
    "meltmail.com",
    "mintemail.com",
    "mohmal.com",
    "moakt.com",
    "mt2015.com",
    "mytemp.email",
    "mytrashmail.com",
    "nada.email",
    "nowmymail.com",
    "sharklasers.com",
    "spam4.me",
    "spambog.com",
    "spambox.us",
    "spamgourmet.com",
    "spamex.com",
    "spamfree24.org",
    "spamherelots.com",
    "spaml.de",
    "spammotel.com",
    "tempail.com",
    "tempinbox.com",
    "tempmail.de",
    "tempmail.net",
    "tempmail.org",
    "tempmailaddress.com",
    "tempmailo.com",
    "temp-mail.io",
    "temp-mail.org",
    "tempr.email",
    "throwawaymail.com",
    "throwaway.email",
    "trash-mail.com",
    "trashmail.com",
    "trashmail.de",
    "trashmail.net",
    "trbvm.com",
    "wegwerfmail.de",
    "wegwerfmail.net",
    "yopmail.com",
    "yopmail.fr",
    "yopmail.net",
    "zetmail.com",
};
