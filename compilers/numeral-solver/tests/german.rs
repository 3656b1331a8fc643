
use numeral_protocol::Language;

const DE: Language = Language::DeDe;

number!(dreiunddreissig, DE, "dreiunddreißig", 33.0);
number!(vierundvierzig, DE, "vierundvierzig", 44.0);
number!(
    millions_with_fused_remainder,
    DE,
    "zwei Millionen sechshundertzweiundzwanzigtausenddreihundertachtundachtzig",
    2622388.0
);
number!(tens_of_thousands, DE, "zweiundzwanzigtausend", 22000.0);
number!(decimal_komma, DE, "fünf Komma siebenundsechzig", 5.67);
number!(
    fused_thousands,
    DE,
    "neun Millionen siebenhundertdreiundsechzigtausendvierhundertvierundvierzig",
    9763444.0
);
number!(fraction_is_digit_string, DE, "fünf Komma einundzwanzig", 5.21);
number!(hundreds_and_tens, DE, "dreihunderteinundzwanzig", 321.0);
number!(
    joiner_inside_compound,
    DE,
    "fünf Millionen vierhunderttausenddreihundertundeinundzwanzig",
    5400321.0
);
number!(einhundert, DE, "einhundert", 100.0);
number!(fuenfundzwanzig, DE, "fünfundzwanzig", 25.0);
number!(glued_year, DE, "neunzehnhundertneunundsechzig", 1969.0);
number!(hundreds_scale_backwards, DE, "zweihunderttausend", 200000.0);
number!(
    article_form_of_one,
    DE,
    "einemillionneunhundertachtzigtausend",
    1980000.0
);
number!(hundred_merges_into_thousands, DE, "einhundertzweitausend", 102000.0);
number!(
    hundred_merges_across_und,
    DE,
    "einhundertundzweitausend",
    102000.0
);
number!(ascii_eszett, DE, "dreissig", 30.0);
number!(thousand_hundred_and_one, DE, "tausendhunderteins", 1101.0);
number!(hundred_and_eleven, DE, "zweihundertelf", 211.0);

text!(
    two_regions_in_text,
    DE,
    "fünf Millionen vierhunderttausenddreihundertundeinundzwanzig und normaler Text sollte eine andere Region wie dies fünfhundertundzwei erstellen",
    "5400321 und normaler Text sollte 1 andere Region wie dies 502 erstellen"
);
text!(ordinal_ten, DE, "Der zweiundzwanzigste Mai", "Der 22 Mai");
text!(
    ordinal_and_glued_year,
    DE,
    "fünfter Mai neunzehnhundertneunundneunzig",
    "5 Mai 1999"
);
text!(unit_before_ten_stays_apart, DE, "eins dreißigtausend", "1 30000");
text!(lone_article, DE, "ein", "ein");
text!(fraction_word_is_plain, DE, "eineinhalb Stunden", "eineinhalb Stunden");

one_number!(spoken_year, DE, "neunzehnhundertachtundneunzig", 1998.0);
